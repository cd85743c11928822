//! Period-to-daily normalization of fees and volume

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use crate::{
    types::{RawPool, RentabilityCalculation},
    utils::safe_div,
};

/// How period totals are turned into "24h" figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DailyNormalization {
    /// Divide by the full reporting window, active or not.
    #[default]
    NaiveDailyAverage,
    /// Divide by the number of days that saw fees or volume.
    ActiveDaysAverage,
}

impl FromStr for DailyNormalization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "naive_daily_average" => Ok(DailyNormalization::NaiveDailyAverage),
            "active" | "active_days_average" => Ok(DailyNormalization::ActiveDaysAverage),
            _ => Err(format!("invalid daily normalization {s:?}; expected naive|active")),
        }
    }
}

impl fmt::Display for DailyNormalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DailyNormalization::NaiveDailyAverage => write!(f, "naive"),
            DailyNormalization::ActiveDaysAverage => write!(f, "active"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeriodTotals {
    pub fees: Decimal,
    pub volume: Decimal,
    pub active_days: Decimal,
    pub range_days: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyFigures {
    pub fees_24h: Decimal,
    pub volume_24h: Decimal,
}

impl PeriodTotals {
    /// Aggregate stats carry no per-day activity, so every day in the range counts.
    pub fn from_stats(pool: &RawPool, default_range_days: Decimal) -> Self {
        let range_days = pool.range_in_days(default_range_days);
        Self {
            fees: pool.period_fees(),
            volume: pool.period_volume(),
            active_days: range_days,
            range_days,
        }
    }

    /// Totals over a reported series. The window is the number of reported
    /// days, traded or idle, not the pool's aggregate `rangeInDays`.
    pub fn from_series(rentability: &RentabilityCalculation, series_days: usize) -> Self {
        Self {
            fees: rentability.total_fees,
            volume: rentability.total_volume,
            active_days: rentability.days_with_data.into(),
            range_days: Decimal::from(series_days),
        }
    }

    pub fn divisor(&self, policy: DailyNormalization) -> Decimal {
        match policy {
            DailyNormalization::NaiveDailyAverage => self.range_days,
            DailyNormalization::ActiveDaysAverage => self.active_days,
        }
    }
}

pub fn normalize_daily(totals: &PeriodTotals, policy: DailyNormalization) -> DailyFigures {
    let days = totals.divisor(policy);
    if days <= Decimal::ZERO {
        return DailyFigures {
            fees_24h: Decimal::ZERO,
            volume_24h: Decimal::ZERO,
        };
    }

    DailyFigures {
        fees_24h: safe_div(totals.fees, days),
        volume_24h: safe_div(totals.volume, days),
    }
}
