//! Rentability calculation results

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentabilityCalculation {
    pub apr: Decimal,
    pub total_fees: Decimal,
    pub total_volume: Decimal,
    pub average_tvl: Decimal,
    pub days_with_data: u32,
    pub calculation_method: CalculationMethod,
}

/// Which data tier produced a [`RentabilityCalculation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    Historical, // full time series
    Estimated,  // period aggregate stats
    Fallback,   // single-day estimate from volume and fee tier
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationMethod::Historical => write!(f, "historical"),
            CalculationMethod::Estimated => write!(f, "estimated"),
            CalculationMethod::Fallback => write!(f, "fallback"),
        }
    }
}
