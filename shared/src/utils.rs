//! # Shared Utility Functions
//!
//! Numeric helpers used by the order form, the market table and every balance display.
//!
//! ## Rounding
//!
//! - [`round_to`] - Round to a fixed number of decimal places
//! - [`round8`] - Shorthand for the 8-decimal precision used by order math
//!
//! ## Formatting
//!
//! - [`format_number`] - Thousands-separated number with fixed decimals
//! - [`format_usd`] - `$`-prefixed [`format_number`]
//! - [`format_percentage`] - Signed percentage change
//! - [`format_compact_usd`] - `$1.23T` / `$45.60B` / `$7.80M` style headline numbers
//!
//! ## Pairs
//!
//! - [`TradingPair`] - `BASE/QUOTE` symbol, parsed with [`str::parse`]
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_number, TradingPair};
//!
//! assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
//! let pair: TradingPair = "ETH/USDT".parse().unwrap();
//! assert_eq!(pair.to_string(), "ETH/USDT");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Round `value` to `decimals` decimal places, half away from zero.
///
/// Values with no fractional digits left at that precision (magnitude times `10^decimals`
/// at or above 2^53) and non-finite values are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::round_to;
///
/// assert_eq!(round_to(1.23456789123, 8), 1.23456789);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    if !value.is_finite() || value.abs() * factor >= EXACT_INTEGER_LIMIT {
        return value;
    }
    (value * factor).round() / factor
}

/// 2^53, the first magnitude where `f64` has no fractional precision left
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Round to the 8 decimals every order quantity and total is kept at
pub fn round8(value: f64) -> f64 {
    round_to(value, 8)
}

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// assert_eq!(format_number(-2500.0, 0), "-2,500");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads badly, so the sign only shows when something non-zero survives rounding
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// `$` followed by [`format_number`]
pub fn format_usd(value: f64, decimals: usize) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, decimals))
    } else {
        format!("${}", format_number(value, decimals))
    }
}

/// Format a percentage change with an explicit sign (e.g., "+2.50%", "-1.20%")
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_percentage;
///
/// assert_eq!(format_percentage(2.5), "+2.50%");
/// assert_eq!(format_percentage(-1.2), "-1.20%");
/// assert_eq!(format_percentage(0.0), "0.00%");
/// ```
pub fn format_percentage(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.2}%", change)
    } else {
        format!("{:.2}%", change)
    }
}

/// Headline dollar figure scaled to T/B/M with two decimals
///
/// ```rust
/// use shared::utils::format_compact_usd;
///
/// assert_eq!(format_compact_usd(2.45e12), "$2.45T");
/// assert_eq!(format_compact_usd(98.7e9), "$98.70B");
/// assert_eq!(format_compact_usd(1.2e6), "$1.20M");
/// assert_eq!(format_compact_usd(950.0), "$950.00");
/// ```
pub fn format_compact_usd(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if abs >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format_usd(value, 2)
    }
}

/// Error returned when a string is not a `BASE/QUOTE` pair
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid trading pair '{0}': expected BASE/QUOTE")]
pub struct ParsePairError(pub String);

/// Trading pair such as `BTC/USDT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    pub base: String,
    pub quote: String,
}

impl TradingPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
        }
    }
}

impl FromStr for TradingPair {
    type Err = ParsePairError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s.split_once('/').ok_or_else(|| ParsePairError(s.to_string()))?;
        let (base, quote) = (base.trim(), quote.trim());
        let is_symbol = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric());
        if !is_symbol(base) || !is_symbol(quote) {
            return Err(ParsePairError(s.to_string()));
        }
        Ok(Self::new(base.to_ascii_uppercase(), quote.to_ascii_uppercase()))
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round8() {
        assert_eq!(round8(100.0 * 2.0), 200.0);
        assert_eq!(round8(0.1 + 0.2), 0.3);
        assert_eq!(round8(1.0 / 3.0), 0.33333333);
    }

    #[test]
    fn test_round8_large_and_non_finite_values() {
        // Already at 8-decimal resolution
        assert_eq!(round8(100000000.12469135), 100000000.12469135);
        assert_eq!(round8(123456789.5), 123456789.5);
        assert_eq!(round8(1e301), 1e301);
        assert_eq!(round8(-1e301), -1e301);
        assert_eq!(round8(f64::INFINITY), f64::INFINITY);
        assert!(round8(f64::NAN).is_nan());
        assert_eq!(round8(12345.123456789), 12345.12345679);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(0.5, 4), "0.5000");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50000.75, 2), "$50,000.75");
        assert_eq!(format_usd(-12.0, 2), "-$12.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.1), "+5.10%");
        assert_eq!(format_percentage(-0.5), "-0.50%");
    }

    #[test]
    fn test_parse_pair() {
        let pair: TradingPair = "btc/usdt".parse().unwrap();
        assert_eq!(pair, TradingPair::new("BTC", "USDT"));
        assert_eq!(pair.to_string(), "BTC/USDT");
    }

    #[test]
    fn test_parse_pair_rejects_malformed() {
        assert!("BTCUSDT".parse::<TradingPair>().is_err());
        assert!("/USDT".parse::<TradingPair>().is_err());
        assert!("BTC/".parse::<TradingPair>().is_err());
        assert!("BTC/US-DT".parse::<TradingPair>().is_err());
        assert!("BTC/ETH/USDT".parse::<TradingPair>().is_err());
    }
}
