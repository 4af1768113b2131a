//! The directory of lesson videos

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use coursecast_common::media::validate_media_name;

use super::queries::stream::StreamVideoError;

/// Read-only view of the video directory
///
/// Names are resolved against the canonical directory on every call, so the
/// directory may be created or repopulated while the server runs.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    root: PathBuf,
}

impl VideoLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a request name to a regular file strictly inside the library
    ///
    /// Lexically unsafe names fail with `InvalidName`; names that escape
    /// through a symlink fail with `OutsideLibrary`.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub async fn resolve(&self, name: &str) -> Result<PathBuf, StreamVideoError> {
        let relative = validate_media_name(name)?;

        let root = tokio::fs::canonicalize(&self.root).await.map_err(|e| {
            tracing::warn!(error = %e, "Video directory is not accessible");
            not_found_or_io(e, name)
        })?;

        // Any failure here (missing, ENOTDIR, dangling link) means no such video.
        let candidate = tokio::fs::canonicalize(root.join(relative))
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, name, "Video name does not resolve");
                StreamVideoError::NotFound(name.to_string())
            })?;

        if !candidate.starts_with(&root) {
            tracing::warn!(name, "Video name resolves outside the library");
            return Err(StreamVideoError::OutsideLibrary);
        }

        let metadata = tokio::fs::metadata(&candidate).await?;
        if !metadata.is_file() {
            return Err(StreamVideoError::NotFound(name.to_string()));
        }

        Ok(candidate)
    }
}

fn not_found_or_io(err: std::io::Error, name: &str) -> StreamVideoError {
    match err.kind() {
        ErrorKind::NotFound => StreamVideoError::NotFound(name.to_string()),
        _ => StreamVideoError::Io(err),
    }
}
