//! Stream video query
//!
//! Opens a library file and positions a bounded reader over either the whole
//! file or the requested byte range. The caller turns the reader into a
//! chunked response body; nothing is buffered here.

use std::io::SeekFrom;

use serde::{Deserialize, Serialize};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncSeekExt, Take};

use coursecast_common::media::video_content_type;
use coursecast_common::CourseCastError;

use crate::features::videos::library::VideoLibrary;
use crate::features::videos::range::{parse_range, ByteRange, RangeError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamVideoQuery {
    /// Name relative to the video directory
    pub filename: String,
    /// Raw `Range` header value, if any
    pub range: Option<String>,
}

/// An opened video, ready to be streamed
#[derive(Debug)]
pub struct VideoStream {
    pub content_type: String,
    /// Size of the whole file
    pub total_size: u64,
    /// `Some` for a partial (206) response
    pub range: Option<ByteRange>,
    /// Yields exactly [`VideoStream::content_length`] bytes
    pub reader: Take<File>,
}

impl VideoStream {
    pub fn content_length(&self) -> u64 {
        self.range.map_or(self.total_size, |r| r.len())
    }

    pub fn content_range(&self) -> Option<String> {
        self.range.map(|r| r.content_range(self.total_size))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StreamVideoError {
    #[error("Invalid video name: {0}")]
    InvalidName(#[from] CourseCastError),

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Video name resolves outside the video directory")]
    OutsideLibrary,

    #[error("{source} (resource is {size} bytes)")]
    Range { source: RangeError, size: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[tracing::instrument(skip(library))]
pub async fn handle(library: &VideoLibrary, query: StreamVideoQuery) -> Result<VideoStream, StreamVideoError> {
    let path = library.resolve(&query.filename).await?;

    let mut file = File::open(&path).await?;
    let total_size = file.metadata().await?.len();
    let content_type = video_content_type(&path);

    let Some(header) = query.range else {
        tracing::debug!(total_size, "Serving full video");
        return Ok(VideoStream {
            content_type,
            total_size,
            range: None,
            reader: file.take(total_size),
        });
    };

    let range = parse_range(&header)
        .and_then(|spec| spec.resolve(total_size))
        .map_err(|source| {
            tracing::debug!(header = %header, total_size, error = %source, "Rejecting range");
            StreamVideoError::Range {
                source,
                size: total_size,
            }
        })?;

    file.seek(SeekFrom::Start(range.start)).await?;
    tracing::debug!(range = %range, total_size, "Serving partial video");

    Ok(VideoStream {
        content_type,
        total_size,
        range: Some(range),
        reader: file.take(range.len()),
    })
}
