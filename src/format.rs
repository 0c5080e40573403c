//! Display formatting for Turkish lira amounts, counts and dates
//!
//! The figure functions return raw decimals; these helpers only turn them into
//! text for tables, print views and exported documents.

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;

const CURRENCY_SYMBOL: &str = "₺";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Format an amount as Turkish lira, e.g. `₺1.234,50` or `-₺200,00`
pub fn currency(amount: &BigDecimal) -> String {
    let (negative, integer, fraction) = split_rounded(amount, 2);
    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{CURRENCY_SYMBOL}{}{DECIMAL_SEPARATOR}{fraction}",
        group_thousands(&integer)
    )
}

/// Format a transaction count with thousands grouping, e.g. `12.345`
pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Format a signed count with thousands grouping
pub fn signed_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a ratio as a comma-decimal percentage, e.g. `0.025` as `2,50%`
pub fn percent(ratio: &BigDecimal) -> String {
    let (negative, integer, fraction) = split_rounded(&(ratio.clone() * BigDecimal::from(100)), 2);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{integer}{DECIMAL_SEPARATOR}{fraction}%")
}

/// Format a ledger date as `dd.MM.yyyy`, or `-` when unknown
pub fn short_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}

/// Round half away from zero and split into sign, integer digits and
/// fraction digits
fn split_rounded(amount: &BigDecimal, scale: i64) -> (bool, String, String) {
    let rounded = amount.with_scale_round(scale, RoundingMode::HalfUp);
    let negative = rounded < BigDecimal::from(0);
    let digits = rounded.abs().with_scale(scale).to_string();

    match digits.split_once('.') {
        Some((integer, fraction)) => (negative, integer.to_string(), fraction.to_string()),
        None => (negative, digits, "0".repeat(scale.max(0) as usize)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(&dec("0")), "₺0,00");
        assert_eq!(currency(&dec("12.5")), "₺12,50");
        assert_eq!(currency(&dec("9537.5")), "₺9.537,50");
        assert_eq!(currency(&dec("1234567.891")), "₺1.234.567,89");
        assert_eq!(currency(&dec("-200")), "-₺200,00");
        assert_eq!(currency(&dec("0.005")), "₺0,01");
        assert_eq!(currency(&dec("-0.001")), "₺0,00");
    }

    #[test]
    fn test_counts() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(12345), "12.345");
        assert_eq!(count(1000000), "1.000.000");
        assert_eq!(signed_count(-1500), "-1.500");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(&dec("0.025")), "2,50%");
        assert_eq!(percent(&dec("0.1")), "10,00%");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date(NaiveDate::from_ymd_opt(2024, 3, 5)), "05.03.2024");
        assert_eq!(short_date(None), "-");
    }
}
