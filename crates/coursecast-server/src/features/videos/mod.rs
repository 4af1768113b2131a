//! Lesson video streaming with HTTP range support

pub mod library;
pub mod queries;
pub mod range;
pub mod routes;

pub use library::VideoLibrary;
pub use queries::{StreamVideoError, StreamVideoQuery, VideoStream};
pub use range::{parse_range, ByteRange, RangeError, RangeSpec};
pub use routes::videos_routes;
