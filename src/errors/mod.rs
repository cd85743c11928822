//! Error types for the caller-side boundary (configuration and report I/O)
//!
//! The metrics computations themselves never fail; degenerate inputs degrade
//! to zero-valued output instead.

pub mod engine_error;

pub use engine_error::*;
