//! Historical time-series points for a single pool

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use super::{NumericInput, ToNumber};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalDataPoint {
    /// Epoch milliseconds, usually sent as a string.
    pub timestamp: Option<NumericInput>,
    #[serde(rename = "volumeInUSD")]
    pub volume_in_usd: Option<NumericInput>,
    #[serde(rename = "feesInUSD")]
    pub fees_in_usd: Option<NumericInput>,
    #[serde(rename = "totalValueLockedInUSD")]
    pub total_value_locked_in_usd: Option<NumericInput>,
    pub transactions_count: Option<NumericInput>,
}

impl HistoricalDataPoint {
    pub fn fees(&self) -> Decimal {
        self.fees_in_usd.to_number()
    }

    pub fn volume(&self) -> Decimal {
        self.volume_in_usd.to_number()
    }

    pub fn tvl(&self) -> Decimal {
        self.total_value_locked_in_usd.to_number()
    }

    /// A day counts toward averages only if something traded.
    pub fn has_activity(&self) -> bool {
        self.fees() > Decimal::ZERO || self.volume() > Decimal::ZERO
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        let millis = self.timestamp.to_number().to_i64()?;
        DateTime::from_timestamp_millis(millis)
    }
}
