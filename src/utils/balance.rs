//! Pact decimal handling and number formatting for display.
//!
//! Pact returns numeric values either as plain JSON numbers or wrapped in
//! `{"decimal": "..."}` / `{"int": ...}` objects. `PactDecimal` accepts all of
//! them; `reduce_balance` turns one into an `f64` truncated to a fixed
//! precision.

use crate::core::constants::DEFAULT_PRECISION;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Integer payload of a Pact `{"int": ...}` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PactInt {
    Number(i64),
    Text(String),
}

/// A numeric value as returned by Pact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PactDecimal {
    /// Plain JSON number
    Number(f64),
    /// `{"decimal": "123.456"}`
    Decimal { decimal: String },
    /// `{"int": 42}` or `{"int": "42"}`
    Int { int: PactInt },
}

impl PactDecimal {
    /// Parse the raw value without any precision reduction.
    ///
    /// Returns `None` for unparsable strings and non-finite numbers.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            PactDecimal::Number(n) => *n,
            PactDecimal::Decimal { decimal } => decimal.trim().parse::<f64>().ok()?,
            PactDecimal::Int { int } => match int {
                PactInt::Number(n) => *n as f64,
                PactInt::Text(s) => s.trim().parse::<f64>().ok()?,
            },
        };
        value.is_finite().then_some(value)
    }
}

impl Default for PactDecimal {
    fn default() -> Self {
        PactDecimal::Number(0.0)
    }
}

impl From<f64> for PactDecimal {
    fn from(value: f64) -> Self {
        PactDecimal::Number(value)
    }
}

impl fmt::Display for PactDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PactDecimal::Number(n) => write!(f, "{}", n),
            PactDecimal::Decimal { decimal } => write!(f, "{}", decimal),
            PactDecimal::Int { int: PactInt::Number(n) } => write!(f, "{}", n),
            PactDecimal::Int { int: PactInt::Text(s) } => write!(f, "{}", s),
        }
    }
}

/// Reduce a Pact value to an `f64` truncated to `precision` decimals.
///
/// Whole numbers are returned as-is. Unparsable values reduce to zero.
pub fn reduce_balance(value: &PactDecimal, precision: u32) -> f64 {
    let Some(raw) = value.to_f64() else {
        return 0.0;
    };
    if raw.fract() == 0.0 {
        return raw;
    }
    let scale = 10f64.powi(precision.min(15) as i32);
    (raw * scale).trunc() / scale
}

/// `reduce_balance` with the default 12 decimal precision.
pub fn reduce_balance_default(value: &PactDecimal) -> f64 {
    reduce_balance(value, DEFAULT_PRECISION)
}

/// Format a number with fixed decimals and comma thousands separators.
///
/// # Examples
/// ```
/// use kaddex_dashboard::utils::balance::human_readable_number;
/// assert_eq!(human_readable_number(1234567.891, 2), "1,234,567.89");
/// ```
pub fn human_readable_number(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Deserialize a Pact value directly into a reduced `f64`.
pub fn deserialize_reduced<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = PactDecimal::deserialize(deserializer)?;
    Ok(reduce_balance_default(&value))
}
