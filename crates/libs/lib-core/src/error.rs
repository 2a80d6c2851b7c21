//! # Centralized Error Handling
//!
//! Library-level error type [`AppError`] shared by the chain library and the
//! terminal. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`Config`](AppError::Config)
//! 2. **User input** - [`InvalidInput`](AppError::InvalidInput)
//! 3. **External** - [`Rpc`](AppError::Rpc), [`Transaction`](AppError::Transaction)
//! 4. **Everything else** - [`Internal`](AppError::Internal)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_amount(input: &str) -> Result<&str> {
//!     if input.trim().is_empty() {
//!         return Err(AppError::InvalidInput("Amount cannot be empty".to_string()));
//!     }
//!     Ok(input)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Library-wide error type.
///
/// Each variant includes a descriptive `String` for context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON-RPC endpoint failure (network, rate limit, node issues).
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction failure (rejected, reverted, receipt wait failed).
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get a user-friendly error message.
    ///
    /// RPC and internal failures get a generic message; their details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) | AppError::Transaction(msg) | AppError::Config(msg) => msg.clone(),
            AppError::Rpc(_) => "Network temporarily unavailable".to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Convert `lib_utils::envs::Error` to `AppError`.
impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{} must be set in environment", name))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{} has an invalid format", name))
            }
        }
    }
}
