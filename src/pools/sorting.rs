//! Ordering of assembled pool metrics

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use crate::types::PoolMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Apr,
    Tvl,
    Fees,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortBy {
    fn key(self, pool: &PoolMetrics) -> Decimal {
        match self {
            SortBy::Apr => pool.apr,
            SortBy::Tvl => pool.tvl,
            SortBy::Fees => pool.fees_24h,
            SortBy::Volume => pool.volume_24h,
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apr" => Ok(SortBy::Apr),
            "tvl" => Ok(SortBy::Tvl),
            "fees" => Ok(SortBy::Fees),
            "volume" => Ok(SortBy::Volume),
            _ => Err(format!("invalid sort key {s:?}; expected apr|tvl|fees|volume")),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("invalid sort order {s:?}; expected asc|desc")),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Apr => write!(f, "apr"),
            SortBy::Tvl => write!(f, "tvl"),
            SortBy::Fees => write!(f, "fees"),
            SortBy::Volume => write!(f, "volume"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Stable sort: pools with equal keys keep their input order in both directions.
pub fn sort_pools(mut pools: Vec<PoolMetrics>, sort_by: SortBy, order: SortOrder) -> Vec<PoolMetrics> {
    pools.sort_by(|a, b| {
        let (ka, kb) = (sort_by.key(a), sort_by.key(b));
        match order {
            SortOrder::Asc => ka.cmp(&kb),
            SortOrder::Desc => kb.cmp(&ka),
        }
    });
    pools
}
