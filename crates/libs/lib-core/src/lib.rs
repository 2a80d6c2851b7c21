//! # Core Library
//!
//! Configuration, error types and fixed-point unit helpers shared by the chain
//! library and the terminal.

pub mod config;
pub mod error;
pub mod units;

// Re-export commonly used types
pub use config::{ApprovalPolicy, Config, ContractAddresses};
pub use error::{AppError, Result};
pub use units::{format_amount, parse_amount, parse_positive_amount, to_f64, TOKEN_DECIMALS};
