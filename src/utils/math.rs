//! Mathematical utility functions

use rust_decimal::prelude::*;

/// Division that yields zero for a zero divisor and saturates instead of overflowing.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() != denominator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

/// Round half away from zero, the way `toFixed` presents values.
pub fn round_display(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

pub fn fixed(value: Decimal, dp: u32) -> String {
    let precision = dp as usize;
    format!("{:.precision$}", round_display(value, dp))
}
