//! APR estimation across historical, aggregate and single-day data tiers

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use tracing::debug;
use crate::{
    config::{DAYS_PER_YEAR, DEFAULT_RANGE_DAYS},
    types::{CalculationMethod, HistoricalDataPoint, RawPool, RentabilityCalculation},
    utils::safe_div,
};

/// Annualized fee yield in percent for `fees` collected over `days` against `tvl`.
///
/// Returns zero when any input is non-positive. Near-zero TVL produces very
/// large values; results saturate at `Decimal::MAX` rather than overflow.
pub fn calculate_apr(fees: Decimal, tvl: Decimal, days: Decimal) -> Decimal {
    if tvl <= Decimal::ZERO || fees <= Decimal::ZERO || days <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    annualize(safe_div(fees, days), tvl)
}

fn annualize(daily_fees: Decimal, tvl: Decimal) -> Decimal {
    if tvl <= Decimal::ZERO || daily_fees <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let yearly = daily_fees.saturating_mul(DAYS_PER_YEAR);
    safe_div(yearly, tvl).saturating_mul(dec!(100)).max(Decimal::ZERO)
}

pub fn calculate_pool_rentability(
    pool: &RawPool,
    historical: Option<&[HistoricalDataPoint]>,
) -> RentabilityCalculation {
    calculate_pool_rentability_with(pool, historical, DEFAULT_RANGE_DAYS)
}

/// Picks the best available tier: a non-empty time series, then period
/// stats with positive fees, then a one-day estimate from volume and fee tier.
pub fn calculate_pool_rentability_with(
    pool: &RawPool,
    historical: Option<&[HistoricalDataPoint]>,
    default_range_days: Decimal,
) -> RentabilityCalculation {
    let range_days = pool.range_in_days(default_range_days);

    let calculation = match historical {
        Some(points) if !points.is_empty() => historical_tier(pool, points, range_days),
        _ if pool.period_fees() > Decimal::ZERO => stats_tier(pool, range_days),
        _ => fallback_tier(pool, range_days),
    };

    debug!(
        pool_id = pool.id(),
        method = %calculation.calculation_method,
        apr = %calculation.apr,
        days_with_data = calculation.days_with_data,
        "Calculated pool rentability"
    );
    calculation
}

fn historical_tier(
    pool: &RawPool,
    points: &[HistoricalDataPoint],
    range_days: Decimal,
) -> RentabilityCalculation {
    let mut total_fees = Decimal::ZERO;
    let mut total_volume = Decimal::ZERO;
    let mut total_tvl = Decimal::ZERO;
    let mut days_with_data: u32 = 0;

    for point in points.iter().filter(|p| p.has_activity()) {
        total_fees = total_fees.saturating_add(point.fees());
        total_volume = total_volume.saturating_add(point.volume());
        total_tvl = total_tvl.saturating_add(point.tvl());
        days_with_data += 1;
    }

    if let (Some(from), Some(to)) = (
        points.first().and_then(HistoricalDataPoint::observed_at),
        points.last().and_then(HistoricalDataPoint::observed_at),
    ) {
        debug!(pool_id = pool.id(), %from, %to, points = points.len(), "Using historical series");
    }

    let average_tvl = if days_with_data == 0 {
        pool.tvl()
    } else {
        safe_div(total_tvl, Decimal::from(days_with_data))
    };

    let apr = if average_tvl > Decimal::ZERO && total_fees > Decimal::ZERO {
        let period_days = Decimal::from(days_with_data).min(range_days);
        annualize(safe_div(total_fees, period_days), average_tvl)
    } else {
        Decimal::ZERO
    };

    RentabilityCalculation {
        apr,
        total_fees,
        total_volume,
        average_tvl,
        days_with_data,
        calculation_method: CalculationMethod::Historical,
    }
}

fn stats_tier(pool: &RawPool, range_days: Decimal) -> RentabilityCalculation {
    let tvl = pool.tvl();
    let total_fees = pool.period_fees();

    RentabilityCalculation {
        apr: calculate_apr(total_fees, tvl, range_days),
        total_fees,
        total_volume: pool.period_volume(),
        average_tvl: tvl,
        days_with_data: range_days.trunc().to_u32().unwrap_or(u32::MAX),
        calculation_method: CalculationMethod::Estimated,
    }
}

// single day of fees estimated from the average daily volume and the fee tier
fn fallback_tier(pool: &RawPool, range_days: Decimal) -> RentabilityCalculation {
    let tvl = pool.tvl();
    let volume_24h = safe_div(pool.period_volume(), range_days);
    let fees_24h = volume_24h.saturating_mul(safe_div(pool.fee_percent(), dec!(100)));

    RentabilityCalculation {
        apr: annualize(fees_24h, tvl),
        total_fees: fees_24h,
        total_volume: volume_24h,
        average_tvl: tvl,
        days_with_data: 1,
        calculation_method: CalculationMethod::Fallback,
    }
}
