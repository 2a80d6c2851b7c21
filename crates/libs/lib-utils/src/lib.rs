//! # Utilities Library
//!
//! Shared utility functions for environment variables, time and amount-input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::{deadline_after, format_time, now_utc, parse_utc};
pub use validation::{sanitize_amount_input, validate_amount_input, validate_not_empty};
