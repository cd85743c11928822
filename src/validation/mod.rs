//! Validation of raw pool records

pub mod pool;

pub use pool::*;
