//! Input checks applied to CLI arguments and configured values.

use crate::errors::{AppError, AppResult};
use crate::models::account::normalize_email;
use regex::Regex;
use std::sync::LazyLock;

pub const MAX_AREA_NAME: usize = 100;
pub const MAX_LOCATION: usize = 150;
pub const MAX_VEHICLE_TYPE: usize = 50;
pub const MAX_EMAIL: usize = 120;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern")
});

/// Normalized email, or `InvalidInput` when it does not look like one.
pub fn email(raw: &str) -> AppResult<String> {
    let email = normalize_email(raw);
    if email.is_empty() || email.chars().count() > MAX_EMAIL || !EMAIL_RE.is_match(&email) {
        return Err(AppError::InvalidInput(format!("invalid email address '{raw}'")));
    }
    Ok(email)
}

pub fn password(raw: &str, min_len: usize) -> AppResult<&str> {
    if raw.chars().count() < min_len {
        return Err(AppError::InvalidInput(format!(
            "password must be at least {min_len} characters long"
        )));
    }
    Ok(raw)
}

fn required_text<'a>(field: &str, raw: &'a str, max: usize) -> AppResult<&'a str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(AppError::InvalidInput(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(value)
}

pub fn area_name(raw: &str) -> AppResult<&str> {
    required_text("area name", raw, MAX_AREA_NAME)
}

pub fn location(raw: &str) -> AppResult<&str> {
    required_text("location", raw, MAX_LOCATION)
}

/// Vehicle types are stored lowercase; the set itself stays open.
pub fn vehicle_type(raw: &str) -> AppResult<String> {
    Ok(required_text("vehicle type", raw, MAX_VEHICLE_TYPE)?.to_lowercase())
}
