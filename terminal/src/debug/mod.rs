//! # Debugging and Tracing Infrastructure
//!
//! File-based structured logging for the xTIME terminal.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/terminal-debug.log` (daily rotation)
//! - **Panic logging**: Location and message of any panic land in the log file
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup
//! terminal::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(surface = ?surface, tx_hash = %hash, "Transaction submitted");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `terminal=info,warn`)
//! - `TERMINAL_LOG_DIR`: Log directory (default `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the debugging system
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
