//! Number formatting for page display.
//!
//! The formatters are pure and total over their typed inputs. Text coming
//! from outside (CLI flags) goes through the `parse_*` functions first, which
//! reject anything that is not a plain integer.

mod helpers;

pub use helpers::Helpers;

use crate::error::{NatviewError, Result};
use num_bigint::BigInt;
use std::fmt::Display;
use std::str::FromStr;

/// Satoshis in one bitcoin.
pub const SATS_PER_BITCOIN: u64 = 100_000_000;

/// Fractional digits in a satoshi-exact bitcoin amount.
pub const BITCOIN_DECIMALS: u32 = 8;

/// Format an integer with a comma every three digits.
///
/// A leading `-` is kept in front of the grouped digits. Text that is not
/// an optionally signed run of ASCII digits is returned unchanged.
pub fn format_number<N: Display>(n: N) -> String {
    let s = n.to_string();
    let digits = s.strip_prefix('-').unwrap_or(&s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return s;
    }

    let mut result = String::with_capacity(s.len() + digits.len() / 3);
    if digits.len() != s.len() {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Compute `max - left` without precision loss.
///
/// The result is not clamped and is negative when `left > max`.
pub fn get_total_available(max: impl Into<BigInt>, left: impl Into<BigInt>) -> String {
    let balance = max.into() - left.into();
    balance.to_string()
}

/// Convert satoshis to a bitcoin amount with trailing zeros trimmed.
pub fn sats_to_bitcoin(sats: u64) -> String {
    sats_to_bitcoin_with_decimals(sats, BITCOIN_DECIMALS)
}

/// Convert satoshis to bitcoin at `decimals` fractional digits, then trim
/// trailing zeros and a bare trailing point.
///
/// Uses integer arithmetic, so every `u64` converts exactly. When
/// `decimals` is below 8 the dropped digits round half-up.
pub fn sats_to_bitcoin_with_decimals(sats: u64, decimals: u32) -> String {
    let mut whole = sats / SATS_PER_BITCOIN;
    let mut frac = sats % SATS_PER_BITCOIN;

    let width = if decimals < BITCOIN_DECIMALS {
        let scale = 10u64.pow(BITCOIN_DECIMALS - decimals);
        frac = (frac + scale / 2) / scale;
        if frac == 10u64.pow(decimals) {
            whole += 1;
            frac = 0;
        }
        decimals as usize
    } else {
        BITCOIN_DECIMALS as usize
    };

    if width == 0 {
        return whole.to_string();
    }

    let mut text = format!("{}.{:0>width$}", whole, frac, width = width);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
    text.truncate(trimmed);
    text
}

/// Parse an arbitrary-precision integer from user input.
pub fn parse_integer(input: &str) -> Result<BigInt> {
    BigInt::from_str(input.trim())
        .map_err(|_| NatviewError::invalid_argument(input, "expected an integer"))
}

/// Parse a satoshi count from user input.
pub fn parse_sats(input: &str) -> Result<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| NatviewError::invalid_argument(input, "expected a non-negative satoshi count"))
}

/// `get_total_available` over textual operands.
pub fn total_available_from_str(max: &str, left: &str) -> Result<String> {
    Ok(get_total_available(parse_integer(max)?, parse_integer(left)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(123456), "123,456");
        assert_eq!(format_number(1000000), "1,000,000");
        assert_eq!(format_number(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-7), "-7");
        assert_eq!(format_number(-1000), "-1,000");
        assert_eq!(format_number(-123456789), "-123,456,789");
    }

    #[test]
    fn test_format_number_passes_through_non_integers() {
        assert_eq!(format_number("abc"), "abc");
        assert_eq!(format_number("-"), "-");
        assert_eq!(format_number("12.5"), "12.5");
    }

    #[test]
    fn test_format_number_bigint() {
        let big = parse_integer("123456789012345678901234567890").unwrap();
        assert_eq!(
            format_number(big),
            "123,456,789,012,345,678,901,234,567,890"
        );
    }

    #[test]
    fn test_get_total_available() {
        assert_eq!(get_total_available(100, 30), "70");
        assert_eq!(get_total_available(30, 100), "-70");
        assert_eq!(get_total_available(0, 0), "0");
    }

    #[test]
    fn test_get_total_available_beyond_f64_precision() {
        assert_eq!(
            get_total_available(9_007_199_254_740_993_u64, 1_u64),
            "9007199254740992"
        );
        assert_eq!(
            total_available_from_str("100000000000000000000000", "1").unwrap(),
            "99999999999999999999999"
        );
    }

    #[test]
    fn test_sats_to_bitcoin() {
        assert_eq!(sats_to_bitcoin(100_000_000), "1");
        assert_eq!(sats_to_bitcoin(150_000_000), "1.5");
        assert_eq!(sats_to_bitcoin(1), "0.00000001");
        assert_eq!(sats_to_bitcoin(0), "0");
        assert_eq!(sats_to_bitcoin(546), "0.00000546");
        assert_eq!(sats_to_bitcoin(2_100_000_000_000_000), "21000000");
    }

    #[test]
    fn test_sats_to_bitcoin_is_exact_for_large_values() {
        assert_eq!(sats_to_bitcoin(u64::MAX), "184467440737.09551615");
        assert_eq!(sats_to_bitcoin(9_007_199_254_740_993), "90071992.54740993");
    }

    #[test]
    fn test_sats_to_bitcoin_with_decimals() {
        assert_eq!(sats_to_bitcoin_with_decimals(123_456_789, 2), "1.23");
        assert_eq!(sats_to_bitcoin_with_decimals(125_000_000, 1), "1.3");
        assert_eq!(sats_to_bitcoin_with_decimals(199_999_999, 4), "2");
        assert_eq!(sats_to_bitcoin_with_decimals(150_000_000, 0), "2");
        assert_eq!(sats_to_bitcoin_with_decimals(1, 2), "0");
        assert_eq!(sats_to_bitcoin_with_decimals(1, 12), "0.00000001");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(matches!(
            parse_integer("12a"),
            Err(NatviewError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_sats("-5"),
            Err(NatviewError::InvalidArgument { .. })
        ));
        assert!(total_available_from_str("10", "").is_err());
        assert_eq!(parse_sats(" 546 ").unwrap(), 546);
    }
}
