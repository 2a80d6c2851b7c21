//! # Common Error Types
//!
//! Consolidated error handling for the terminal application.
//!
//! ## Error Categories
//!
//! - **Chain**: contract reads, submissions and receipts (see [`lib_evm::ChainError`])
//! - **Wallet**: local signer setup
//! - **State**: invalid application state (e.g. submit without a wallet)
//! - **Validation**: user input that cannot be turned into a transaction
//!
//! ## Error Conversion
//!
//! - `ChainError` → `AppError::Chain`
//! - `WalletError` → `AppError::Wallet`
//! - `lib_core::AppError` → the closest terminal category

use crate::services::wallet::WalletError;
use lib_evm::ChainError;
use thiserror::Error;

/// Application-wide error type covering all error scenarios in the terminal.
///
/// # Example
///
/// ```rust
/// use terminal::core::error::AppError;
///
/// let err = AppError::Validation("Amount must be positive".to_string());
/// assert_eq!(err.to_string(), "Validation error: Amount must be positive");
/// ```
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Chain interaction failure.
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    /// Wallet setup failure (missing or malformed key).
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The app is not in a state that allows the action.
    #[error("State error: {0}")]
    State(String),

    /// Input validation failure.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Text suitable for a toast.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Chain(e) => e.user_message(),
            AppError::Wallet(msg) | AppError::State(msg) | AppError::Validation(msg) => {
                msg.clone()
            }
        }
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<lib_core::AppError> for AppError {
    fn from(err: lib_core::AppError) -> Self {
        match err {
            lib_core::AppError::InvalidInput(msg) => AppError::Validation(msg),
            lib_core::AppError::Rpc(msg) => AppError::Chain(ChainError::Rpc(msg)),
            lib_core::AppError::Transaction(msg) => AppError::Chain(ChainError::Contract(msg)),
            lib_core::AppError::Config(msg) | lib_core::AppError::Internal(msg) => {
                AppError::State(msg)
            }
        }
    }
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::Wallet("no key".to_string()).to_string(),
            "Wallet error: no key"
        );
        assert_eq!(
            AppError::State("busy".to_string()).to_string(),
            "State error: busy"
        );
    }

    #[test]
    fn test_chain_error_user_message() {
        let err = AppError::from(ChainError::Rejected("User rejected the request".to_string()));
        assert_eq!(err.user_message(), "Transaction was rejected");
    }

    #[test]
    fn test_from_wallet_error() {
        let err: AppError = WalletError::MissingKey.into();
        assert!(matches!(err, AppError::Wallet(_)));
    }

    #[test]
    fn test_from_core_error() {
        let err: AppError = lib_core::AppError::InvalidInput("bad amount".to_string()).into();
        assert!(matches!(err, AppError::Validation(ref m) if m == "bad amount"));

        let err: AppError = lib_core::AppError::Rpc("timeout".to_string()).into();
        assert!(matches!(err, AppError::Chain(ChainError::Rpc(_))));
    }
}
