//! Shared utilities for feature modules
//!
//! - **validation**: Input validation for account fields
//! - **error_helpers**: Database constraint helpers
//! - **test_helpers**: In-memory database fixtures (test-only)

pub mod error_helpers;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use validation::{validate_email, validate_name, validate_password, FieldValidationError};
