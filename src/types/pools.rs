//! Raw pool records as delivered by the liquidity data provider

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use super::{NumericInput, ToNumber};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPool {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub address: Option<String>,
    pub chain: Option<ChainRef>,
    pub provider: Option<ProviderRef>,
    /// Swap fee as a percentage, e.g. `0.3` for a 0.3% pool.
    pub fee: Option<NumericInput>,
    #[serde(rename = "totalValueLockedUSD")]
    pub total_value_locked_usd: Option<NumericInput>,
    #[serde(deserialize_with = "lenient_tokens")]
    pub tokens: Option<Vec<RawToken>>,
    pub stats: Option<PoolStats>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainRef {
    pub id: Option<NumericInput>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawToken {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub logo: Option<String>,
    pub address: Option<String>,
    pub decimals: Option<NumericInput>,
    pub pool_share_in_percentage: Option<NumericInput>,
}

/// Aggregates over the trailing `range_in_days` window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolStats {
    pub range_in_days: Option<NumericInput>,
    #[serde(rename = "feesInUSD")]
    pub fees_in_usd: Option<NumericInput>,
    #[serde(rename = "volumeInUSD")]
    pub volume_in_usd: Option<NumericInput>,
    pub transactions_count: Option<NumericInput>,
}

impl RawPool {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn tvl(&self) -> Decimal {
        self.total_value_locked_usd.to_number()
    }

    pub fn fee_percent(&self) -> Decimal {
        self.fee.to_number()
    }

    pub fn tokens(&self) -> &[RawToken] {
        self.tokens.as_deref().unwrap_or_default()
    }

    pub fn period_fees(&self) -> Decimal {
        self.stats.as_ref().map(|s| s.fees_in_usd.to_number()).unwrap_or_default()
    }

    pub fn period_volume(&self) -> Decimal {
        self.stats.as_ref().map(|s| s.volume_in_usd.to_number()).unwrap_or_default()
    }

    /// Window covered by `stats`; missing or non-positive values use `default_days`.
    pub fn range_in_days(&self, default_days: Decimal) -> Decimal {
        let days = self.stats.as_ref().map(|s| s.range_in_days.to_number()).unwrap_or_default();
        if days > Decimal::ZERO { days } else { default_days }
    }
}

/// Numeric ids are kept as their decimal text.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

/// A malformed token entry keeps its slot as an empty token so one bad
/// element never discards the pool or shifts token positions.
fn lenient_tokens<'de, D>(deserializer: D) -> Result<Option<Vec<RawToken>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => Some(
            entries
                .into_iter()
                .map(|entry| serde_json::from_value(entry).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn malformed_token_entries_keep_their_slot() {
        let pool: RawPool = serde_json::from_value(json!({
            "id": "pool-1",
            "tokens": ["weth", {"symbol": "usdc", "decimals": 6}, {"symbol": 42}]
        }))
        .unwrap();

        let tokens = pool.tokens();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].symbol, None);
        assert_eq!(tokens[1].symbol.as_deref(), Some("usdc"));
        assert_eq!(tokens[2].symbol, None);
    }

    #[test]
    fn numeric_id_is_kept_as_text() {
        let pool: RawPool = serde_json::from_value(json!({"id": 8453})).unwrap();
        assert_eq!(pool.id(), "8453");

        let pool: RawPool = serde_json::from_value(json!({"id": {"nested": true}, "tokens": "none"})).unwrap();
        assert_eq!(pool.id, None);
        assert!(pool.tokens().is_empty());
    }

    #[test]
    fn range_falls_back_when_not_positive() {
        let pool: RawPool = serde_json::from_value(json!({"stats": {"rangeInDays": -7}})).unwrap();
        assert_eq!(pool.range_in_days(Decimal::from(30)), Decimal::from(30));
    }
}
