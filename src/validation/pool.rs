//! Pool shape validation
//!
//! Pools that fail these checks are dropped from collections before any
//! metrics are computed. Nothing here returns an error.

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;
use crate::types::{RawPool, ToNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    /// Keep pools whose locked value coerces to exactly zero.
    pub accept_zero_tvl: bool,
}

pub fn is_valid_pool(pool: &RawPool) -> bool {
    is_valid_pool_with(pool, &ValidationPolicy::default())
}

pub fn is_valid_pool_with(pool: &RawPool, policy: &ValidationPolicy) -> bool {
    let has_id = pool.id.as_deref().is_some_and(|id| !id.is_empty());
    let has_address = pool.address.as_deref().is_some_and(|addr| !addr.is_empty());

    // zero-valued strings ("0", "0.00") are rejected too unless the policy allows them
    let has_tvl = match &pool.total_value_locked_usd {
        None => false,
        Some(_) if policy.accept_zero_tvl => true,
        Some(tvl) => tvl.is_truthy() && tvl.to_number() != Decimal::ZERO,
    };

    has_id && has_address && has_tvl && pool.tokens().len() >= 2
}

/// Validate an untyped payload. `null`, non-objects and records that do not
/// deserialize as a pool are simply invalid.
pub fn is_valid_pool_value(value: &Value) -> bool {
    parse_pool(value).is_some_and(|pool| is_valid_pool(&pool))
}

pub fn parse_pool(value: &Value) -> Option<RawPool> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}

pub fn filter_valid_pools<'a>(pools: &'a [RawPool], policy: &ValidationPolicy) -> Vec<&'a RawPool> {
    pools
        .iter()
        .filter(|pool| {
            let valid = is_valid_pool_with(pool, policy);
            if !valid {
                debug!(pool_id = pool.id(), "Dropping pool with incomplete data");
            }
            valid
        })
        .collect()
}
