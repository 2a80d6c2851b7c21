//! # Chain Errors
//!
//! Errors raised while reading from or writing to the chain, and their mapping
//! onto the two user-visible failure kinds: a rejected signature and a generic
//! transaction failure.

use alloy::primitives::TxHash;
use lib_core::AppError;
use thiserror::Error;

/// Longest wallet/RPC detail appended to a user-facing failure message.
const SHORT_MESSAGE_LEN: usize = 120;

/// Chain interaction error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The signer or wallet refused to sign.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    /// The transaction was mined but reverted.
    #[error("Transaction reverted: {tx_hash}")]
    Reverted { tx_hash: TxHash },

    /// Transport, node or receipt-wait failure.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The contract call could not be built or decoded.
    #[error("Contract error: {0}")]
    Contract(String),

    /// A write was attempted without a signing account.
    #[error("No signer configured")]
    NoSigner,
}

impl ChainError {
    /// Map a raw submission error message onto [`Rejected`](Self::Rejected) or [`Rpc`](Self::Rpc).
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("user rejected") || lower.contains("user denied") {
            ChainError::Rejected(message)
        } else {
            ChainError::Rpc(message)
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ChainError::Rejected(_))
    }

    /// Toast text for a failed transaction.
    pub fn user_message(&self) -> String {
        match self {
            ChainError::Rejected(_) => "Transaction was rejected".to_string(),
            ChainError::Reverted { .. } => "Transaction failed: reverted on-chain".to_string(),
            ChainError::NoSigner => "Transaction failed: no wallet connected".to_string(),
            ChainError::Rpc(detail) | ChainError::Contract(detail) => match short_message(detail) {
                Some(short) => format!("Transaction failed: {}", short),
                None => "Transaction failed".to_string(),
            },
        }
    }
}

/// First line of `detail`, cut to a toast-friendly length.
fn short_message(detail: &str) -> Option<String> {
    let line = detail.lines().map(str::trim).find(|l| !l.is_empty())?;
    if line.chars().count() <= SHORT_MESSAGE_LEN {
        return Some(line.to_string());
    }
    let cut: String = line.chars().take(SHORT_MESSAGE_LEN).collect();
    Some(format!("{}...", cut.trim_end()))
}

impl From<alloy::contract::Error> for ChainError {
    fn from(err: alloy::contract::Error) -> Self {
        match err {
            alloy::contract::Error::TransportError(e) => ChainError::classify(e.to_string()),
            other => ChainError::Contract(other.to_string()),
        }
    }
}

impl From<ChainError> for AppError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Rpc(msg) => AppError::Rpc(msg),
            ChainError::Contract(msg) => AppError::Rpc(msg),
            other => AppError::Transaction(other.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rejection_case_insensitive() {
        let err = ChainError::classify("MetaMask Tx Signature: User Rejected the request.");
        assert!(err.is_rejection());
        assert_eq!(err.user_message(), "Transaction was rejected");

        let err = ChainError::classify("user denied transaction signature");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_classify_generic_failure() {
        let err = ChainError::classify("insufficient funds for gas * price + value");
        assert!(!err.is_rejection());
        assert_eq!(
            err.user_message(),
            "Transaction failed: insufficient funds for gas * price + value"
        );
    }

    #[test]
    fn test_user_message_without_detail() {
        assert_eq!(ChainError::Rpc(String::new()).user_message(), "Transaction failed");
        assert_eq!(
            ChainError::Reverted { tx_hash: TxHash::ZERO }.user_message(),
            "Transaction failed: reverted on-chain"
        );
    }

    #[test]
    fn test_short_message_truncates() {
        let long = format!("{}\nsecond line", "x".repeat(300));
        let msg = ChainError::Rpc(long).user_message();
        assert!(msg.ends_with("..."));
        assert!(!msg.contains("second line"));
        assert!(msg.len() < 160);
    }

    #[test]
    fn test_into_app_error() {
        let app: AppError = ChainError::Rpc("timeout".to_string()).into();
        assert_eq!(app, AppError::Rpc("timeout".to_string()));

        let app: AppError = ChainError::NoSigner.into();
        assert!(matches!(app, AppError::Transaction(_)));
    }
}
