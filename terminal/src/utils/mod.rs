//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Amount validation and Max-button arithmetic
//! - **[`runtime`]**: Tokio runtime construction
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate utilities (number, USD and address formatting)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
