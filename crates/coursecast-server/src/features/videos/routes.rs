//! Video streaming route
//!
//! - `GET /video/*filename` - Whole file (200) or one byte range (206)
//!
//! Every response advertises `Accept-Ranges: bytes`. Unsatisfiable ranges get
//! 416 with `Content-Range: bytes */<size>`; unknown or unsafe names get 404.

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio_util::io::ReaderStream;

use super::library::VideoLibrary;
use super::queries::{stream, StreamVideoError, StreamVideoQuery, VideoStream};
use crate::error::AppError;
use crate::features::FeatureState;

pub fn videos_routes() -> Router<FeatureState> {
    Router::new().route("/video/*filename", get(stream_video))
}

#[tracing::instrument(skip(library, headers))]
async fn stream_video(
    State(library): State<VideoLibrary>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let range = headers
        .get(header::RANGE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    let video = stream::handle(&library, StreamVideoQuery { filename, range }).await?;
    Ok(into_response(video))
}

fn into_response(video: VideoStream) -> Response {
    let status = if video.range.is_some() {
        StatusCode::PARTIAL_CONTENT
    } else {
        StatusCode::OK
    };
    let content_length = video.content_length();
    let content_range = video.content_range();
    let content_type = HeaderValue::from_str(&video.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static(coursecast_common::media::OCTET_STREAM));

    let body = Body::from_stream(ReaderStream::new(video.reader));
    let mut response = (status, body).into_response();

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content_length));
    headers.insert(header::ACCEPT_RANGES, HeaderValue::from_static("bytes"));
    if let Some(content_range) = content_range.and_then(|v| HeaderValue::from_str(&v).ok()) {
        headers.insert(header::CONTENT_RANGE, content_range);
    }

    response
}

impl From<StreamVideoError> for AppError {
    fn from(err: StreamVideoError) -> Self {
        match err {
            StreamVideoError::InvalidName(_)
            | StreamVideoError::NotFound(_)
            | StreamVideoError::OutsideLibrary => AppError::NotFound("Video not found".to_string()),
            StreamVideoError::Range { size, .. } => AppError::RangeNotSatisfiable { size },
            StreamVideoError::Io(e) => AppError::Io(e),
        }
    }
}
