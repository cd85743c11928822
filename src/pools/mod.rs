//! Pool composition, period normalization and metrics assembly

pub mod composition;
pub mod normalizer;
pub mod sorting;
pub mod metrics;

pub use composition::*;
pub use normalizer::*;
pub use sorting::*;
pub use metrics::*;
