//! Newsletter subscription form

use std::sync::OnceLock;
use regex::Regex;
use crate::utils::errors::{EventHubError, Result};

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Check a subscription address and return it trimmed
pub fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    if email.is_empty() {
        return Err(EventHubError::InvalidInput(EMAIL_REQUIRED.to_string()));
    }

    if !email_pattern().is_match(email) {
        return Err(EventHubError::InvalidInput(EMAIL_INVALID.to_string()));
    }

    Ok(email.to_string())
}
