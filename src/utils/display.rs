//! Display formatting for USD magnitudes, percentages and fiat amounts

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::fmt;
use tracing::info;
use crate::{
    types::{PoolMetrics, RentabilityCalculation},
    utils::math::fixed,
};

/// Compact USD rendering used across the pool tables.
///
/// Large values collapse to `K`/`M` with one decimal, small positive values
/// get progressively more decimals so dust amounts never render as zero.
/// Zero and negative values render as `$0.00`.
pub fn format_currency(value: Decimal) -> String {
    match value {
        v if v >= dec!(1_000_000) => format!("${}M", fixed(v / dec!(1_000_000), 1)),
        v if v >= dec!(1_000) => format!("${}K", fixed(v / dec!(1_000), 1)),
        v if v >= dec!(1) => format!("${}", fixed(v, 2)),
        v if v >= dec!(0.001) => format!("${}", fixed(v, 4)),
        v if v >= dec!(0.0001) => format!("${}", fixed(v, 6)),
        v if v > Decimal::ZERO => format!("${}", fixed(v, 8)),
        _ => "$0.00".to_string(),
    }
}

pub fn format_percentage(value: Decimal) -> String {
    format!("{}%", fixed(value, 2))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiatCurrency {
    Usd,
    Brl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    PtBr,
}

impl fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FiatCurrency::Usd => write!(f, "USD"),
            FiatCurrency::Brl => write!(f, "BRL"),
        }
    }
}

impl Locale {
    fn separators(self) -> (char, char) {
        match self {
            Locale::EnUs => (',', '.'),
            Locale::PtBr => ('.', ','),
        }
    }

    // pt-BR puts a non-breaking space between symbol and amount
    fn symbol(self, currency: FiatCurrency) -> &'static str {
        match (self, currency) {
            (Locale::EnUs, FiatCurrency::Usd) => "$",
            (Locale::EnUs, FiatCurrency::Brl) => "R$",
            (Locale::PtBr, FiatCurrency::Usd) => "US$\u{a0}",
            (Locale::PtBr, FiatCurrency::Brl) => "R$\u{a0}",
        }
    }
}

/// Currency rendering for the swap and buy flow.
///
/// Unlike [`format_currency`] this never abbreviates: amounts are grouped by
/// thousands and always carry two decimals, with locale punctuation.
pub fn format_fiat(value: Decimal, currency: FiatCurrency, locale: Locale) -> String {
    let (group_sep, decimal_sep) = locale.separators();
    let rendered = fixed(value.abs(), 2);
    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(digit);
    }

    let sign = if value < Decimal::ZERO && !rendered.chars().all(|c| c == '0' || c == '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}{}{}{}", sign, locale.symbol(currency), grouped, decimal_sep, fraction)
}

pub fn print_pool_metrics(metrics: &[PoolMetrics]) {
    info!("\n📊 Pool Metrics ({} pools)", metrics.len());
    for (rank, pool) in metrics.iter().enumerate() {
        info!("#{} {} - {}", rank + 1, pool.id, pool.formatted.composition);
        info!("   APR: {}", pool.formatted.apr);
        info!("   TVL: {}", pool.formatted.tvl);
        info!("   Volume 24h: {}   Fees 24h: {}", pool.formatted.volume_24h, pool.formatted.fees_24h);
    }
    info!("");
}

pub fn print_rentability(pool_id: &str, calculation: &RentabilityCalculation) {
    info!("💰 Rentability for {} ({})", pool_id, calculation.calculation_method);
    info!("   APR: {}", format_percentage(calculation.apr));
    info!("   Total fees: {}   Total volume: {}",
        format_currency(calculation.total_fees),
        format_currency(calculation.total_volume)
    );
    info!("   Average TVL: {} over {} days with data",
        format_currency(calculation.average_tvl),
        calculation.days_with_data
    );
}
