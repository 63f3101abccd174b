//! Field validation for contact input.
//!
//! The checks are deliberately shallow: a phone number is 7-15 ASCII digits,
//! and an email only has to contain an `@` and a `.` somewhere.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

const PHONE_PATTERN: &str = r"^[0-9]{7,15}$";

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Check that a phone number is 7-15 ASCII digits and nothing else.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Check that an email contains both `@` and `.`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Validate a phone number.
///
/// # Errors
///
/// Returns [`Error::InvalidPhone`] if the number is not 7-15 digits.
pub fn validate_phone(phone: &str) -> Result<()> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(Error::invalid_phone(phone))
    }
}

/// Validate an email address.
///
/// # Errors
///
/// Returns [`Error::InvalidEmail`] if the address lacks `@` or `.`.
pub fn validate_email(email: &str) -> Result<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(Error::invalid_email(email))
    }
}
