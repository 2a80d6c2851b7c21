//! # Time Utilities
//!
//! Utilities for time formatting and transaction deadlines using chrono.

use chrono::{DateTime, Duration, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time as RFC3339 string.
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339()
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Unix timestamp (seconds) `window_secs` after `from`.
///
/// Router swaps take an absolute deadline; this is the only place it is computed.
pub fn deadline_after(from: DateTime<Utc>, window_secs: u64) -> u64 {
    let deadline = i64::try_from(window_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|window| from.checked_add_signed(window))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    u64::try_from(deadline.timestamp()).unwrap_or(0)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
