//! Formatting for rendered report views.
//!
//! Pure functions converting raw numeric/date values into display strings.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a monetary amount as "$1,234.56".
///
/// Rounds to two decimal places with Banker's Rounding, groups thousands with
/// commas, and prefixes negatives with a minus sign ("-$12.00").
#[must_use]
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    let abs = rounded.abs();
    let text = format!("{abs:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac_part}")
}

/// Formats a calendar date as "Jan 15, 2025".
#[must_use]
pub fn date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Label for a (year, month) bucket, e.g. "January 2025".
#[must_use]
pub fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1).map_or_else(
        || format!("{month}/{year}"),
        |d| d.format("%B %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(5), "$5.00")]
    #[case(dec!(1234.5), "$1,234.50")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(-12), "-$12.00")]
    #[case(dec!(999), "$999.00")]
    #[case(dec!(1000), "$1,000.00")]
    fn test_currency(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(currency(amount), expected);
    }

    #[test]
    fn test_currency_bankers_rounding() {
        assert_eq!(currency(dec!(2.125)), "$2.12");
        assert_eq!(currency(dec!(2.135)), "$2.14");
    }

    #[test]
    fn test_date() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        assert_eq!(date(d), "Jan 15, 2025");
        let d = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
        assert_eq!(date(d), "Dec 3, 2024");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2025, 1), "January 2025");
        assert_eq!(month_label(2024, 12), "December 2024");
        // Out-of-range months fall back to a numeric label.
        assert_eq!(month_label(2025, 13), "13/2025");
    }
}
