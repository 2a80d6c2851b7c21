//! Validation utilities for user input

use lib_core::parse_positive_amount;
use lib_evm::U256;

pub const ENTER_AMOUNT: &str = "Enter Amount";
pub const INSUFFICIENT_BALANCE: &str = "Insufficient Balance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate an amount against the balance it would be paid from.
///
/// An unread balance counts as zero.
pub fn validate_trade_amount(input: &str, balance: Option<U256>) -> ValidationResult {
    let Some(amount) = parse_positive_amount(input) else {
        return ValidationResult::err(ENTER_AMOUNT);
    };

    if amount > balance.unwrap_or(U256::ZERO) {
        return ValidationResult::err(INSUFFICIENT_BALANCE);
    }

    ValidationResult::ok()
}

/// Clean up text typed into an amount field (digits and one decimal point).
pub fn sanitize_amount(raw: &str) -> String {
    lib_utils::validation::sanitize_amount_input(raw)
}

/// Balance left for a "Max" click after keeping `reserve` for gas.
pub fn max_spendable(balance: Option<U256>, reserve: U256) -> U256 {
    balance.unwrap_or(U256::ZERO).saturating_sub(reserve)
}
