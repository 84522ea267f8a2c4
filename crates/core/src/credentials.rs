//! Registration credential rules: email shape and password strength.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Compiled email-shape regex. Compiled once, reused forever.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid regex"));

/// Validate the structural shape of an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !EMAIL_RE.is_match(email) {
        return Err(CoreError::Validation(format!(
            "invalid email address: {email}"
        )));
    }
    Ok(())
}

/// Validate password strength.
///
/// Accepted passwords are ASCII alphanumeric, at least
/// [`MIN_PASSWORD_LENGTH`] characters, and contain at least one letter and
/// one digit.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    let long_enough = password.len() >= MIN_PASSWORD_LENGTH;
    let alphanumeric = password.chars().all(|c| c.is_ascii_alphanumeric());
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && alphanumeric && has_letter && has_digit) {
        return Err(CoreError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} alphanumeric characters \
             with at least one letter and one digit"
        )));
    }
    Ok(())
}
