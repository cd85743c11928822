//! Pool Rentability - liquidity pool metrics engine for the wallet dashboard
//!
//! Turns raw pool statistics from the liquidity data provider (TVL, period
//! fees and volume, token shares) and optional historical series into APR,
//! daily figures, composition and display strings. Every computation is pure
//! and synchronous; network access and persistence stay with the caller.

pub mod config;
pub mod types;
pub mod errors;
pub mod validation;
pub mod pools;
pub mod rentability;
pub mod utils;
pub mod storage;

// Re-export commonly used items
pub use config::EngineConfig;
pub use errors::{EngineError, EngineResult};
pub use pools::{
    assemble_pool_metrics, build_pool_metrics, calculate_pool_composition, process_pool_metrics,
    sort_pools, DailyNormalization, SortBy, SortOrder,
};
pub use rentability::{calculate_apr, calculate_pool_rentability};
pub use types::*;
pub use utils::{format_currency, format_fiat, format_percentage, FiatCurrency, Locale};
pub use validation::{is_valid_pool, is_valid_pool_value, ValidationPolicy};
