//! Display formatting for on-chain amounts.
//!
//! Unknown readings render as the shared `---` placeholder.

use lib_core::to_f64;
use lib_evm::U256;
use shared::utils::{format_number, format_usd, PLACEHOLDER};

/// Token amount with thousands separators.
pub fn token(value: Option<U256>, max_fraction_digits: usize) -> String {
    match value {
        Some(v) => format_number(to_f64(v), max_fraction_digits),
        None => PLACEHOLDER.to_string(),
    }
}

/// Token amount followed by its symbol.
pub fn token_with_symbol(value: Option<U256>, max_fraction_digits: usize, symbol: &str) -> String {
    match value {
        Some(_) => format!("{} {}", token(value, max_fraction_digits), symbol),
        None => PLACEHOLDER.to_string(),
    }
}

/// Plain integer count (holders, transactions).
pub fn count(value: Option<U256>) -> String {
    match value {
        Some(v) => {
            let digits = v.to_string();
            let mut out = String::with_capacity(digits.len() + digits.len() / 3);
            for (i, ch) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(ch);
            }
            out
        }
        None => PLACEHOLDER.to_string(),
    }
}

/// Dollar value of `amount` tokens at `usd_price` (both 18-decimal fixed point).
pub fn usd(amount: Option<U256>, usd_price: Option<U256>) -> String {
    match amount {
        Some(a) => format_usd(to_f64(a), usd_price.map(to_f64)),
        None => PLACEHOLDER.to_string(),
    }
}

/// USD price of one token.
pub fn usd_price(usd_price: Option<U256>) -> String {
    format_usd(1.0, usd_price.map(to_f64))
}

/// Fee percentage, e.g. `5%` or `2.5%`.
pub fn percent(pct: f64) -> String {
    format!("{}%", format_number(pct, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: u64) -> U256 {
        U256::from(n) * U256::from(10u64).pow(U256::from(18u8))
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(token(None, 2), "---");
        assert_eq!(token_with_symbol(None, 2, "PLS"), "---");
        assert_eq!(count(None), "---");
        assert_eq!(usd(None, Some(tokens(1))), "---");
        assert_eq!(usd(Some(tokens(1)), None), "---");
    }

    #[test]
    fn test_token_amounts() {
        assert_eq!(token(Some(tokens(1_234_567)), 2), "1,234,567");
        assert_eq!(token_with_symbol(Some(tokens(3)), 4, "xTIME"), "3 xTIME");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(Some(U256::from(0u8))), "0");
        assert_eq!(count(Some(U256::from(999u16))), "999");
        assert_eq!(count(Some(U256::from(1_234_567u32))), "1,234,567");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(Some(U256::ZERO), Some(tokens(2))), "$0.00");
        assert_eq!(usd(Some(tokens(3)), Some(tokens(2))), "$6.00");
        assert_eq!(usd(Some(U256::from(1u8)), Some(tokens(1))), "<$0.01");
        assert_eq!(usd_price(Some(tokens(2))), "$2.00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(5.0), "5%");
        assert_eq!(percent(2.5), "2.5%");
    }
}
