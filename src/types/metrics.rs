//! Derived, display-ready pool metrics

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMetrics {
    pub id: String,
    pub apr: Decimal,
    pub tvl: Decimal,
    pub volume_24h: Decimal,
    pub fees_24h: Decimal,
    pub composition: PoolComposition,
    pub formatted: FormattedMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolComposition {
    pub token0: TokenShare,
    pub token1: TokenShare,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenShare {
    pub symbol: String,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedMetrics {
    pub apr: String,
    pub tvl: String,
    pub volume_24h: String,
    pub fees_24h: String,
    pub composition: String,
}
