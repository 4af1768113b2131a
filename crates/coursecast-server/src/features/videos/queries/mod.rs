pub mod stream;

pub use stream::{StreamVideoError, StreamVideoQuery, VideoStream};
