/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Availability color:
/// 0 free → red
/// under 10% free → yellow
/// otherwise → green
pub fn color_for_availability(available: i64, capacity: i64) -> &'static str {
    if capacity <= 0 {
        GREY
    } else if available <= 0 {
        RED
    } else if available * 10 < capacity {
        YELLOW
    } else {
        GREEN
    }
}

/// Wrap `value` in the availability color.
pub fn colorize_available(value: &str, available: i64, capacity: i64) -> String {
    format!("{}{value}{RESET}", color_for_availability(available, capacity))
}

/// Grey out placeholders such as "--" or empty cells.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
