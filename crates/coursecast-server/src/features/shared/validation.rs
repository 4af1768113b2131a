//! Shared validation utilities
//!
//! Callers trim input before validating; these functions only check shape.

use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 100;

/// RFC 5321 path limit
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Keeps argon2 work bounded per request
pub const MAX_PASSWORD_LENGTH: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldValidationError {
    #[error("{field} is required and cannot be empty")]
    Required { field: &'static str },

    #[error("{field} must be at most {max_length} characters")]
    TooLong {
        field: &'static str,
        max_length: usize,
    },

    #[error("Email address is invalid")]
    InvalidEmail,
}

fn check_length(
    value: &str,
    field: &'static str,
    max_length: usize,
) -> Result<(), FieldValidationError> {
    if value.is_empty() {
        return Err(FieldValidationError::Required { field });
    }
    if value.chars().count() > max_length {
        return Err(FieldValidationError::TooLong { field, max_length });
    }
    Ok(())
}

/// Display name: 1 to [`MAX_NAME_LENGTH`] characters
pub fn validate_name(name: &str) -> Result<(), FieldValidationError> {
    check_length(name, "Name", MAX_NAME_LENGTH)
}

/// Email: non-empty, bounded, with a local part and a domain around `@`
pub fn validate_email(email: &str) -> Result<(), FieldValidationError> {
    check_length(email, "Email", MAX_EMAIL_LENGTH)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(FieldValidationError::InvalidEmail),
    }
}

pub fn validate_password(password: &str) -> Result<(), FieldValidationError> {
    check_length(password, "Password", MAX_PASSWORD_LENGTH)
}
