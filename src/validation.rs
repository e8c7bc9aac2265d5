//! Field validation predicates for the registration form
//!
//! Each predicate is pure: it maps a raw field value (and, for the confirm
//! field, the sibling password value) to success or a single tagged reason.
//! Displaying the rejection is the caller's concern.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum character count for the full name field
pub const MIN_NAME_CHARS: usize = 3;

/// Minimum character count for the password field
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Reason a field value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,
    #[error("value is too short")]
    TooShort,
    #[error("value is not a well-formed email address")]
    InvalidFormat,
    #[error("password is missing a required character class")]
    WeakPassword,
    #[error("values do not match")]
    Mismatch,
    #[error("terms were not accepted")]
    NotAccepted,
}

/// local@domain.tld with no whitespace or extra '@' in any part
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Validate the full name: required, at least [`MIN_NAME_CHARS`] after trimming
pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

/// Validate the email address: required, must match [`EMAIL_PATTERN`] after trimming
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// Validate the password: required, at least [`MIN_PASSWORD_CHARS`], and at
/// least one ASCII digit, one lowercase and one uppercase letter.
///
/// Length is checked before strength so a short-and-weak password reports
/// `TooShort`. The value is not trimmed.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::TooShort);
    }
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    if !(has_digit && has_lower && has_upper) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}

/// Validate the confirmation: required, must be identical to the password
pub fn validate_confirm_password(value: &str, password: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required);
    }
    if value != password {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Validate the terms checkbox
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if !accepted {
        return Err(ValidationError::NotAccepted);
    }
    Ok(())
}
