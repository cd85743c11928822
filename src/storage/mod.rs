//! Report input loading and persistence

pub mod reports;

pub use reports::*;
