//! Core data types and structures

pub mod numeric;
pub mod pools;
pub mod historical;
pub mod metrics;
pub mod rentability;

pub use numeric::*;
pub use pools::*;
pub use historical::*;
pub use metrics::*;
pub use rentability::*;
