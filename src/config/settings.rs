//! Engine configuration and environment variable handling
//!
//! The computation modules only ever see an [`EngineConfig`] value; reading
//! the environment happens here, at the caller boundary.

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use crate::{
    errors::{EngineError, EngineResult},
    pools::{DailyNormalization, SortBy, SortOrder},
    validation::ValidationPolicy,
};

// Calculation constants
pub const DAYS_PER_YEAR: Decimal = dec!(365);
pub const DEFAULT_RANGE_DAYS: Decimal = dec!(30);
pub const MAX_RANGE_DAYS: Decimal = dec!(365);

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Pools shown on the dashboard; empty means every valid pool.
    pub pool_ids: Vec<String>,
    pub default_range_days: Decimal,
    pub daily_normalization: DailyNormalization,
    pub validation: ValidationPolicy,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_ids: Vec::new(),
            default_range_days: DEFAULT_RANGE_DAYS,
            daily_normalization: DailyNormalization::default(),
            validation: ValidationPolicy::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so callers and tests can supply their own source.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            pool_ids: var("NOTUS_POOL_IDS")
                .map(|ids| {
                    ids.split(',')
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            default_range_days: match var("POOL_RANGE_DAYS") {
                Some(raw) => parse_range_days(&raw)?,
                None => defaults.default_range_days,
            },
            daily_normalization: parse_or("DAILY_NORMALIZATION", var("DAILY_NORMALIZATION"), defaults.daily_normalization)?,
            validation: ValidationPolicy {
                accept_zero_tvl: parse_or("ACCEPT_ZERO_TVL", var("ACCEPT_ZERO_TVL"), false)?,
            },
            sort_by: parse_or("POOL_SORT_BY", var("POOL_SORT_BY"), defaults.sort_by)?,
            sort_order: parse_or("POOL_SORT_ORDER", var("POOL_SORT_ORDER"), defaults.sort_order)?,
        })
    }

    pub fn includes_pool(&self, pool_id: &str) -> bool {
        self.pool_ids.is_empty() || self.pool_ids.iter().any(|id| id == pool_id)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> EngineResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| EngineError::config(key, &value, e.to_string())),
        None => Ok(default),
    }
}

fn parse_range_days(raw: &str) -> EngineResult<Decimal> {
    let days = Decimal::from_str(raw.trim())
        .map_err(|e| EngineError::config("POOL_RANGE_DAYS", raw, e.to_string()))?;
    if days <= Decimal::ZERO || days > MAX_RANGE_DAYS {
        return Err(EngineError::config(
            "POOL_RANGE_DAYS",
            raw,
            format!("must be within (0, {}]", MAX_RANGE_DAYS),
        ));
    }
    Ok(days)
}
