//! Server-rendered HTML pages (unstyled)

pub mod accounts;
pub mod courses;
pub mod layout;
