//! Lenient decoding of transport values.
//!
//! The external API transmits monetary fields as JSON numbers or as numeric
//! strings depending on the endpoint, and date fields occasionally carry
//! values that do not parse. The aggregation layer is the normalization
//! boundary: these helpers accept both encodings and fold garbage to `None`
//! (or zero) instead of propagating a decode failure through a whole report.
//!
//! CRITICAL: Never use floating-point for money values. Everything funnels
//! into `rust_decimal::Decimal`.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a JSON value as a decimal amount.
///
/// Accepts numbers and numeric strings; null, empty strings, and non-numeric
/// values yield `None`. Never panics.
#[must_use]
pub fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Decimal::from_str(s).ok()
            }
        }
        _ => None,
    }
}

/// Parses a JSON value as a decimal amount, falling back to zero.
#[must_use]
pub fn decimal_or_zero(value: &Value) -> Decimal {
    decimal(value).unwrap_or(Decimal::ZERO)
}

/// Parses a JSON value as an ISO calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        _ => None,
    }
}

/// Serde adapter: decimal field that may arrive as string or number; garbage
/// and null fold to zero.
pub fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_or_zero(&value))
}

/// Serde adapter: optional decimal field; garbage and null fold to `None`.
pub fn de_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal(&value))
}

/// Serde adapter: optional ISO date field; unparsable values fold to `None`.
pub fn de_date_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(date(&value))
}
