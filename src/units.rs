//! Decimal-string / smallest-unit conversions
//!
//! Token amounts cross the plugin boundary as human-readable decimal strings
//! but every on-chain amount is an integer in the token's smallest unit.
//! Both directions here are pure integer/string arithmetic; no floating
//! point touches an amount.

use crate::{Error, Result};
use alloy::primitives::U256;
use std::str::FromStr;

/// Parse a decimal token amount (e.g. "1.5") into smallest units.
///
/// Fails on empty, negative, or malformed input, and on more fractional
/// digits than the token carries (truncating silently would change the
/// amount the user asked for).
pub fn parse_units(amount: &str, decimals: u8) -> Result<U256> {
    let amount = amount.trim();
    if amount.is_empty() || amount.starts_with('-') || amount.starts_with('+') {
        return Err(Error::InvalidParameter(format!(
            "invalid amount: {amount:?}"
        )));
    }

    let (whole, frac) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };
    // A bare "." would otherwise pass the digit checks and parse as zero
    if whole.is_empty() && frac.is_empty() {
        return Err(Error::InvalidParameter(format!(
            "invalid amount: {amount:?}"
        )));
    }
    if frac.len() > decimals as usize {
        return Err(Error::InvalidParameter(format!(
            "amount {amount} has more than {decimals} decimal places"
        )));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidParameter(format!(
            "invalid amount: {amount:?}"
        )));
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let whole = U256::from_str(whole)
        .map_err(|e| Error::InvalidParameter(format!("invalid amount {amount}: {e}")))?;

    let scale = U256::from(10).pow(U256::from(decimals));
    let mut value = whole
        .checked_mul(scale)
        .ok_or_else(|| Error::InvalidParameter(format!("amount {amount} overflows")))?;

    if !frac.is_empty() {
        let frac_scale = U256::from(10).pow(U256::from(decimals as usize - frac.len()));
        let frac = U256::from_str(frac)
            .map_err(|e| Error::InvalidParameter(format!("invalid amount {amount}: {e}")))?;
        value += frac * frac_scale;
    }

    Ok(value)
}

/// Format a smallest-unit value as a decimal string, trimming trailing zeros.
pub fn format_units(value: U256, decimals: u8) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let divisor = U256::from(10).pow(U256::from(decimals));
    let whole = value / divisor;
    let remainder = value % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let remainder_str = format!("{:0>width$}", remainder, width = decimals as usize);
        let trimmed = remainder_str.trim_end_matches('0');
        if trimmed.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_amounts() {
        assert_eq!(
            parse_units("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u128)
        );
        assert_eq!(parse_units("1000", 6).unwrap(), U256::from(1_000_000_000u64));
        assert_eq!(parse_units("1.", 6).unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_units("0", 18).unwrap(), U256::ZERO);
    }

    #[test]
    fn parse_fractional_amounts() {
        assert_eq!(
            parse_units("1.5", 18).unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(parse_units("0.000001", 6).unwrap(), U256::from(1u64));
        assert_eq!(parse_units(".5", 6).unwrap(), U256::from(500_000u64));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(parse_units("", 18).is_err());
        assert!(parse_units(".", 18).is_err());
        assert!(parse_units("-1", 18).is_err());
        assert!(parse_units("1.2345678", 6).is_err()); // too many decimals
        assert!(parse_units("1,5", 18).is_err());
        assert!(parse_units("abc", 18).is_err());
    }

    #[test]
    fn format_round_trips() {
        let one_eth = U256::from(1_000_000_000_000_000_000u128);
        assert_eq!(format_units(one_eth, 18), "1");

        let one_point_five = U256::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_units(one_point_five, 18), "1.5");

        let thousand_usdc = U256::from(1_000_000_000u64);
        assert_eq!(format_units(thousand_usdc, 6), "1000");

        assert_eq!(format_units(U256::ZERO, 18), "0");
    }
}
