//! Registration password policy.
//!
//! A password must contain at least one uppercase letter, one lowercase
//! letter, one digit, one non-alphanumeric character, and be at least eight
//! characters long. Checked locally before the registration request; login
//! performs no local password validation.

use crate::error::{ReportaError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const MIN_LENGTH: usize = 8;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("hard-coded pattern"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("hard-coded pattern"));
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("hard-coded pattern"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9A-Za-z]").expect("hard-coded pattern"));

/// Returns true if the password satisfies the registration policy.
pub fn is_strong(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
        && UPPERCASE.is_match(password)
        && LOWERCASE.is_match(password)
        && DIGIT.is_match(password)
        && SPECIAL.is_match(password)
}

/// Validates the password against the registration policy.
///
/// # Errors
///
/// Returns `ReportaError::Validation` when any requirement is unmet; no
/// network call may be issued in that case.
pub fn validate(password: &str) -> Result<()> {
    if is_strong(password) {
        Ok(())
    } else {
        Err(ReportaError::validation("password"))
    }
}
