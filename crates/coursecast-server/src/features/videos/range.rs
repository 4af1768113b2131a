//! `Range` header parsing
//!
//! Only a single `bytes=<start>-<end>` range is supported. Either bound may be
//! omitted: a missing start means offset 0 and a missing end means the last
//! byte. Anything else is reported as not satisfiable.

use std::fmt;

/// A parsed but not yet size-checked byte range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

/// An inclusive byte range known to lie inside the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Malformed range header: {0}")]
    Malformed(String),

    #[error("Unsupported range unit: {0}")]
    UnsupportedUnit(String),

    #[error("Multiple ranges are not supported")]
    MultipleRanges,

    #[error("Range cannot be satisfied")]
    Unsatisfiable,
}

/// Parse a `Range` header value such as `bytes=0-1023`
pub fn parse_range(header: &str) -> Result<RangeSpec, RangeError> {
    let malformed = || RangeError::Malformed(header.to_string());

    let (unit, set) = header.trim().split_once('=').ok_or_else(malformed)?;
    if !unit.trim().eq_ignore_ascii_case("bytes") {
        return Err(RangeError::UnsupportedUnit(unit.trim().to_string()));
    }
    if set.contains(',') {
        return Err(RangeError::MultipleRanges);
    }

    let (start, end) = set.split_once('-').ok_or_else(malformed)?;
    let start = parse_bound(start).ok_or_else(malformed)?;
    let end = parse_bound(end).ok_or_else(malformed)?;

    if start.is_none() && end.is_none() {
        return Err(malformed());
    }

    Ok(RangeSpec { start, end })
}

/// `Some(None)` for an omitted bound, `None` for garbage
fn parse_bound(raw: &str) -> Option<Option<u64>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok().map(Some)
}

impl RangeSpec {
    /// Fill in omitted bounds and check `start <= end < size`
    pub fn resolve(self, size: u64) -> Result<ByteRange, RangeError> {
        if size == 0 {
            return Err(RangeError::Unsatisfiable);
        }

        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or(size - 1);

        if start > end || end >= size {
            return Err(RangeError::Unsatisfiable);
        }

        Ok(ByteRange { start, end })
    }
}

impl ByteRange {
    /// Number of bytes covered; never zero
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `Content-Range` value for a 206 response
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
