//! # Shared Display Helpers
//!
//! Formatting helpers shared by the terminal views and its tests.
//!
//! ## Structure
//!
//! - **[`utils`]**: display formatting
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::format_number`]**: Thousands separators with bounded fraction digits
//!   - **[`utils::format_usd`]**: USD value of a token amount, `---` while the price is unknown
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_usd, truncate_address};
//!
//! assert_eq!(truncate_address("0xdcE001f55DA9c00c438d4129c6f02000b818e792"), "0xdc...e792");
//! assert_eq!(format_usd(2.0, Some(1.5)), "$3.00");
//! assert_eq!(format_usd(2.0, None), "---");
//! ```

pub mod utils;

pub use utils::*;
