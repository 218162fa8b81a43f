//! Helper functions and utilities
//!
//! Form validation and display helpers shared by the services and pages.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::utils::errors::{PcbPointError, Result};

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+91)?[6-9][0-9]{9}$").expect("phone pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

static MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-(0[1-9]|1[0-2])$").expect("month pattern is valid")
});

/// Generate a new request id
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// Validate an Indian mobile number, with or without the +91 prefix
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Require a non-blank form field
pub fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PcbPointError::InvalidInput(format!("{} is required", name)));
    }
    Ok(())
}

/// Require a valid phone number in a form field
pub fn require_phone(name: &str, value: &str) -> Result<()> {
    if !is_valid_phone(value) {
        return Err(PcbPointError::InvalidInput(format!("{} must be a valid 10-digit mobile number", name)));
    }
    Ok(())
}

/// Require a valid email in a form field
pub fn require_email(value: &str) -> Result<()> {
    if !is_valid_email(value) {
        return Err(PcbPointError::InvalidInput("Email is not valid".to_string()));
    }
    Ok(())
}

/// Require a `YYYY-MM` month
pub fn require_month(value: &str) -> Result<()> {
    if !MONTH_RE.is_match(value) {
        return Err(PcbPointError::InvalidInput(format!("Month must look like 2024-06, got {}", value)));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date typed by the user
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| PcbPointError::InvalidInput(format!("Date must look like 2024-06-03, got {}", value)))
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a whole-rupee amount with Indian digit grouping
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
