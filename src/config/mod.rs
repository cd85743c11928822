//! Configuration management for the pool metrics engine

pub mod settings;

pub use settings::*;
