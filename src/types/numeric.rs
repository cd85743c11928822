//! Numeric coercion boundary for upstream pool data
//!
//! The data provider sends USD figures either as JSON numbers or as numeric
//! strings. Everything is funneled through [`ToNumber`] so the rest of the
//! crate only ever sees `Decimal`.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// JS-style truthiness: `0`, `NaN` and `""` are falsy, any other string is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            NumericInput::Number(n) => *n != 0.0 && !n.is_nan(),
            NumericInput::Text(s) => !s.is_empty(),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

pub trait ToNumber {
    /// Coerce to a decimal, falling back to zero for anything unusable.
    fn to_number(&self) -> Decimal;
}

impl ToNumber for NumericInput {
    fn to_number(&self) -> Decimal {
        match self {
            NumericInput::Number(n) => Decimal::from_f64(*n).unwrap_or_default(),
            NumericInput::Text(s) => parse_decimal(s),
        }
    }
}

impl<T: ToNumber> ToNumber for Option<T> {
    fn to_number(&self) -> Decimal {
        self.as_ref().map(ToNumber::to_number).unwrap_or_default()
    }
}

/// Loose parse in the manner of `parseFloat`: the longest leading numeric
/// prefix wins (`"100 USD"` is 100) and anything without one is zero.
pub fn parse_decimal(raw: &str) -> Decimal {
    let prefix = numeric_prefix(raw.trim_start());
    if prefix.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(prefix)
        .or_else(|_| Decimal::from_scientific(prefix))
        .ok()
        .or_else(|| prefix.parse::<f64>().ok().and_then(Decimal::from_f64))
        .unwrap_or_default()
}

// sign, digits, optional fraction, optional exponent; an exponent marker
// without digits after it is not part of the number
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    // a bare trailing dot ("5.") is not something Decimal parses
    s[..end].trim_end_matches('.')
}
