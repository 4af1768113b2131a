//! Media helpers
//!
//! Lexical validation of media names and video content types. Filesystem
//! checks (existence, canonical containment) live with the server's video
//! library.

use crate::error::{CourseCastError, Result};
use std::path::{Component, Path};

/// Fallback for files without an extension
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Content type for a video file, derived from its extension
///
/// Well-known containers map to their registered types; any other extension
/// `ext` becomes `video/ext`.
pub fn video_content_type(path: &Path) -> String {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return OCTET_STREAM.to_string();
    };

    let ext = ext.to_ascii_lowercase();
    let subtype = match ext.as_str() {
        "mp4" | "m4v" => "mp4",
        "webm" => "webm",
        "ogv" | "ogg" => "ogg",
        "mov" => "quicktime",
        "mkv" => "x-matroska",
        other => other,
    };
    format!("video/{}", subtype)
}

/// Check that `name` is a relative path made only of normal components
///
/// Rejects empty names, absolute paths, drive prefixes, `.` and `..`.
pub fn validate_media_name(name: &str) -> Result<&Path> {
    if name.trim().is_empty() {
        return Err(CourseCastError::InvalidMediaName("name is empty".to_string()));
    }
    if name.contains('\0') || name.contains('\\') {
        return Err(CourseCastError::InvalidMediaName(name.to_string()));
    }

    let path = Path::new(name);
    let all_normal = path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));

    if !all_normal || path.components().next().is_none() {
        return Err(CourseCastError::InvalidMediaName(name.to_string()));
    }

    Ok(path)
}
