//! Save-time checks for a draft record.
//!
//! Checks run in form order (username, email, age) and stop at the first
//! violation, so a caller fixing fields one at a time always gets pointed at
//! the earliest broken one.

use crate::model::{Field, UserRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Local part, `@`, one or more dot-terminated domain labels, then a
/// top-level label of 2 to 4 characters. ASCII only.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field is required: {0}")]
    IncompleteField(Field),

    #[error("Invalid email format")]
    InvalidEmail,
}

impl ValidationError {
    /// The form field that needs the user's attention.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::IncompleteField(field) => *field,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(record: &UserRecord) -> Result<(), ValidationError> {
    if record.username.is_empty() {
        return Err(ValidationError::IncompleteField(Field::Username));
    }
    if record.email.is_empty() || !is_valid_email(&record.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if record.age.is_empty() {
        return Err(ValidationError::IncompleteField(Field::Age));
    }
    Ok(())
}
