//! Timestamp and rounding utilities

use chrono::{DateTime, Local};

/// Storage format for record creation timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get current local timestamp
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Current local time rendered in [`TIMESTAMP_FORMAT`]
pub fn timestamp_now() -> String {
    format_timestamp(&now())
}

/// Render a timestamp in [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Round a score to 2 decimal places
///
/// Only used at the presentation/persistence boundary. Exact halves round to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
