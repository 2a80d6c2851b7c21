//! # Shared Utility Functions
//!
//! Common display helpers used by the terminal views.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Number Formatting
//!
//! - [`format_number`] - Thousands separators, trailing zeros trimmed
//! - [`format_usd`] - Dollar value of an amount given an optional unit price
//! - [`PLACEHOLDER`] - Rendered whenever a read has not resolved yet

/// Placeholder rendered for reads that have not resolved (or failed to resolve).
pub const PLACEHOLDER: &str = "---";

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xdcE001f55DA9c00c438d4129c6f02000b818e792";
/// assert_eq!(format_address(addr, 6, 4), "0xdcE0...e792");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Also guard against individual lengths exceeding address length to prevent panics
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format a number with comma separators and at most `max_fraction_digits` decimals.
///
/// Trailing zeros in the fraction are dropped, so `1234.5` with 4 digits renders
/// as `1,234.5` rather than `1,234.5000`.
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100");
/// assert_eq!(format_number(-1500.26, 1), "-1,500.3");
/// ```
pub fn format_number(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let formatted = format!("{:.prec$}", value.abs(), prec = max_fraction_digits);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (grouped != "0" || !decimal_part.is_empty());
    let sign = if negative { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Dollar value of `amount` tokens at `price` dollars each.
///
/// - unknown or zero price renders the placeholder
/// - zero amount renders `$0.00`
/// - values under one cent render `<$0.01`
/// - values under 1000 keep two decimals, larger values are rounded to whole dollars
pub fn format_usd(amount: f64, price: Option<f64>) -> String {
    let price = match price {
        Some(p) if p != 0.0 && p.is_finite() => p,
        _ => return PLACEHOLDER.to_string(),
    };
    if !amount.is_finite() || amount == 0.0 {
        return "$0.00".to_string();
    }

    let value = amount * price;
    if value < 0.01 {
        "<$0.01".to_string()
    } else if value < 1000.0 {
        format!("${:.2}", value)
    } else {
        format!("${}", format_number(value, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0xdcE001f55DA9c00c438d4129c6f02000b818e792";
        assert_eq!(format_address(addr, 4, 4), "0xdc...e792");
        assert_eq!(format_address(addr, 6, 6), "0xdcE0...18e792");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 2), "0");
        assert_eq!(format_number(999.999, 2), "1,000");
        assert_eq!(format_number(1234.5, 4), "1,234.5");
        assert_eq!(format_number(5678901.0, 0), "5,678,901");
        assert_eq!(format_number(f64::NAN, 2), PLACEHOLDER);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(10.0, None), PLACEHOLDER);
        assert_eq!(format_usd(10.0, Some(0.0)), PLACEHOLDER);
        assert_eq!(format_usd(0.0, Some(2.0)), "$0.00");
        assert_eq!(format_usd(0.001, Some(1.0)), "<$0.01");
        assert_eq!(format_usd(12.5, Some(2.0)), "$25.00");
        assert_eq!(format_usd(1500.0, Some(2.0)), "$3,000");
    }
}
