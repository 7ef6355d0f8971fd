//! Token amount scaling
//!
//! The relay speaks in base units (integer multiples of `10^-decimals`);
//! the application speaks in human-readable decimal strings.

use num::{BigUint, Integer, Zero};
use std::str::FromStr;
use thiserror::Error;

/// A string that is not a non-negative decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount '{0}'")]
pub struct AmountError(pub String);

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn unit(decimals: u32) -> BigUint {
    BigUint::from(10u32).pow(decimals)
}

/// Parses a base-unit integer string.
pub fn parse_base_units(raw: &str) -> Result<BigUint, AmountError> {
    let raw = raw.trim();
    if raw.is_empty() || !is_digits(raw) {
        return Err(AmountError(raw.to_string()));
    }
    BigUint::from_str(raw).map_err(|_| AmountError(raw.to_string()))
}

/// Renders a base-unit amount as an exact decimal string.
///
/// Trailing fractional zeros are dropped, so `1000000000000000000` with 18
/// decimals renders as `"1"` and `1500000` with 6 decimals as `"1.5"`.
pub fn from_base_units(raw: &str, decimals: u32) -> Result<String, AmountError> {
    let value = parse_base_units(raw)?;
    Ok(format_base_units(&value, decimals))
}

/// Same as [`from_base_units`] for an already parsed value.
pub fn format_base_units(value: &BigUint, decimals: u32) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let (whole, fraction) = value.div_rem(&unit(decimals));
    if fraction.is_zero() {
        return whole.to_string();
    }
    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{}.{}", whole, padded.trim_end_matches('0'))
}

/// Converts a human-readable decimal amount into base units.
///
/// Fraction digits beyond `decimals` are truncated.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<BigUint, AmountError> {
    let trimmed = amount.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(AmountError(amount.to_string()));
    }

    let kept = &fraction[..fraction.len().min(decimals as usize)];
    let digits = format!(
        "{}{:0<width$}",
        if whole.is_empty() { "0" } else { whole },
        kept,
        width = decimals as usize
    );
    BigUint::from_str(&digits).map_err(|_| AmountError(amount.to_string()))
}
