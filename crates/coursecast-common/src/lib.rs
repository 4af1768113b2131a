//! CourseCast Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared building blocks for the CourseCast workspace:
//!
//! - **Error Handling**: [`CourseCastError`] and the [`Result`] alias
//! - **Logging**: tracing subscriber configuration ([`logging`])
//! - **Media**: video content types and safe media names ([`media`])

pub mod error;
pub mod logging;
pub mod media;

pub use error::{CourseCastError, Result};
