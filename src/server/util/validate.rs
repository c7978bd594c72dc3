//! Field validation shared by registration, profile edits and orders.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::server::error::validation::ValidationError;

/// Taiwanese mobile numbers: `09xxxxxxxx`, `+8869xxxxxxxx` or `8869xxxxxxxx`.
static TW_MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?886|0)9\d{8}$").expect("valid mobile regex"));

pub const PASSWORD_MIN_LEN: usize = 4;
pub const PASSWORD_MAX_LEN: usize = 20;

pub fn account(value: &str) -> Result<(), ValidationError> {
    if value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Checks the plaintext password length in characters.
pub fn password(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::PasswordLength)
    }
}

pub fn name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::NameRequired)
    } else {
        Ok(())
    }
}

pub fn phone(value: &str) -> Result<(), ValidationError> {
    if TW_MOBILE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
