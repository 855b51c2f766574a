//! Money and timestamp display helpers plus amount-input parsing.

use chrono::{DateTime, Local, Utc};

/// Minus sign used when displaying spends.
pub const SPEND_SIGN: char = '\u{2212}';

const TIMESTAMP_FORMAT: &str = "%d.%m %H:%M";
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Formats an amount as an integer when it has no fractional part, otherwise
/// with exactly two decimals.
pub fn format_money(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < MAX_EXACT_INTEGER {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", amount)
    }
}

/// Formats a spend amount with a leading minus sign.
pub fn format_spend(amount: f64) -> String {
    format!("{}{}", SPEND_SIGN, format_money(amount))
}

/// Formats a timestamp as `dd.MM HH:mm` in the local timezone.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Keeps digits and the decimal point. Returns `None` when more than one
/// decimal point remains.
pub fn sanitize_amount_input(raw: &str) -> Option<String> {
    let filtered: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if filtered.matches('.').count() > 1 {
        None
    } else {
        Some(filtered)
    }
}

/// Parses user input into a strictly positive amount. Negative input is
/// rejected rather than having its sign stripped.
pub fn parse_amount(raw: &str) -> Option<f64> {
    if raw.trim_start().starts_with('-') {
        return None;
    }
    let cleaned = sanitize_amount_input(raw)?;
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_render_without_decimals() {
        assert_eq!(format_money(120.0), "120");
        assert_eq!(format_money(0.0), "0");
    }

    #[test]
    fn fractional_amounts_render_two_decimals() {
        assert_eq!(format_money(12.5), "12.50");
        assert_eq!(format_money(0.333), "0.33");
    }

    #[test]
    fn spend_uses_minus_sign() {
        assert_eq!(format_spend(30.0), "\u{2212}30");
    }

    #[test]
    fn sanitize_strips_non_numeric_characters() {
        assert_eq!(sanitize_amount_input("$1,200.5"), Some("1200.5".to_string()));
        assert_eq!(sanitize_amount_input("1.2.3"), None);
    }

    #[test]
    fn parse_amount_requires_positive_value() {
        assert_eq!(parse_amount("42"), Some(42.0));
        assert_eq!(parse_amount("0.75"), Some(0.75));
        assert_eq!(parse_amount("0"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("-5"), None);
    }
}
