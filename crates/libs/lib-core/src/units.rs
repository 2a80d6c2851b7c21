//! # Fixed-Point Units
//!
//! Every protocol amount is an integer scaled by 10^18. User input arrives as a
//! decimal string and is parsed here, before anything compares it against a
//! balance or allowance.

use alloy::primitives::utils::{format_units, parse_units, ParseUnits};
use alloy::primitives::U256;

/// Decimals of xTIME, TIME, WPLS, DAI and the native currency.
pub const TOKEN_DECIMALS: u8 = 18;

/// Parse a user-entered decimal into a fixed-point amount.
///
/// Returns `None` for empty, malformed or negative input and for input with
/// more fraction digits than the token supports. Zero parses to `Some(0)`.
pub fn parse_amount(input: &str) -> Option<U256> {
    let input = input.trim();
    lib_utils::validate_amount_input(input, usize::from(TOKEN_DECIMALS)).ok()?;

    let mut normalized = input.to_string();
    if normalized.starts_with('.') {
        normalized.insert(0, '0');
    }
    if normalized.ends_with('.') {
        normalized.pop();
    }

    match parse_units(&normalized, TOKEN_DECIMALS) {
        Ok(ParseUnits::U256(value)) => Some(value),
        Ok(ParseUnits::I256(_)) | Err(_) => None,
    }
}

/// Like [`parse_amount`] but only yields strictly positive amounts.
pub fn parse_positive_amount(input: &str) -> Option<U256> {
    parse_amount(input).filter(|amount| !amount.is_zero())
}

/// Render a fixed-point amount as a plain decimal without trailing zeros.
///
/// This is the inverse of [`parse_amount`]; the "Max" buttons write its output
/// back into the amount field.
pub fn format_amount(value: U256) -> String {
    let full = format_units(value, TOKEN_DECIMALS).unwrap_or_else(|_| "0".to_string());
    if full.contains('.') {
        let trimmed = full.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        full
    }
}

/// Lossy conversion for display arithmetic (USD values, formatted numbers).
pub fn to_f64(value: U256) -> f64 {
    format_amount(value).parse::<f64>().unwrap_or(0.0)
}
