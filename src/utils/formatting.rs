//! Formatting utilities used for CLI outputs.

use chrono::{DateTime, Local, Utc};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "60.0%" style rate.
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Timestamp in local time, minute precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// "4/10" style occupancy.
pub fn format_occupancy(occupied: i64, capacity: i64) -> String {
    format!("{}/{}", occupied, capacity)
}
