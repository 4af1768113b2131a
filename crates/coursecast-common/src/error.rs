//! Error types shared across CourseCast crates

use thiserror::Error;

/// Result type alias for CourseCast library operations
pub type Result<T> = std::result::Result<T, CourseCastError>;

/// Library-level error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseCastError {
    #[error("Invalid media name: {0}")]
    InvalidMediaName(String),
}
