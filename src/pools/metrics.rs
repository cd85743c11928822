//! Assembly of display-ready pool metrics

use std::collections::HashMap;
use tracing::{debug, info};
use crate::{
    config::EngineConfig,
    pools::{
        composition::{calculate_pool_composition, format_composition},
        normalizer::{normalize_daily, PeriodTotals},
        sorting::sort_pools,
    },
    rentability::{calculate_apr, calculate_pool_rentability_with},
    types::{FormattedMetrics, HistoricalDataPoint, PoolMetrics, RawPool},
    utils::{format_currency, format_percentage},
    validation::filter_valid_pools,
};

/// Metrics from the pool's own period stats, using the default configuration.
pub fn process_pool_metrics(pool: &RawPool) -> PoolMetrics {
    assemble_pool_metrics(pool, None, &EngineConfig::default())
}

/// Metrics for one pool.
///
/// Without a series the APR comes straight from the period stats. With a
/// non-empty series the rentability tiers decide the APR and the series
/// totals feed the daily figures under the configured normalization.
pub fn assemble_pool_metrics(
    pool: &RawPool,
    history: Option<&[HistoricalDataPoint]>,
    config: &EngineConfig,
) -> PoolMetrics {
    let tvl = pool.tvl();

    let (apr, totals) = match history {
        Some(points) if !points.is_empty() => {
            let rentability = calculate_pool_rentability_with(pool, Some(points), config.default_range_days);
            (rentability.apr, PeriodTotals::from_series(&rentability, points.len()))
        }
        _ => {
            let totals = PeriodTotals::from_stats(pool, config.default_range_days);
            (calculate_apr(totals.fees, tvl, totals.range_days), totals)
        }
    };

    let daily = normalize_daily(&totals, config.daily_normalization);
    let composition = calculate_pool_composition(pool.tokens());

    PoolMetrics {
        id: pool.id().to_string(),
        formatted: FormattedMetrics {
            apr: format_percentage(apr),
            tvl: format_currency(tvl),
            volume_24h: format_currency(daily.volume_24h),
            fees_24h: format_currency(daily.fees_24h),
            composition: format_composition(&composition),
        },
        apr,
        tvl,
        volume_24h: daily.volume_24h,
        fees_24h: daily.fees_24h,
        composition,
    }
}

/// Batch entry for request handlers: validate, restrict to the configured
/// pool ids, assemble and sort.
pub fn build_pool_metrics(
    pools: &[RawPool],
    history_by_pool: &HashMap<String, Vec<HistoricalDataPoint>>,
    config: &EngineConfig,
) -> Vec<PoolMetrics> {
    let valid = filter_valid_pools(pools, &config.validation);
    let metrics: Vec<PoolMetrics> = valid
        .into_iter()
        .filter(|pool| config.includes_pool(pool.id()))
        .map(|pool| {
            let history = history_by_pool.get(pool.id()).map(Vec::as_slice);
            assemble_pool_metrics(pool, history, config)
        })
        .collect();

    debug!(
        received = pools.len(),
        assembled = metrics.len(),
        sort_by = %config.sort_by,
        order = %config.sort_order,
        "Assembled pool metrics"
    );
    if metrics.is_empty() && !pools.is_empty() {
        info!("No pool survived validation and pool id filtering");
    }

    sort_pools(metrics, config.sort_by, config.sort_order)
}
