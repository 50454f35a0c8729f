use std::fmt;

use crate::group::{MAX_GROUP_SIZE, MIN_GROUP_SIZE};

/// Errors raised while building or rendering media requests.
#[derive(Debug)]
pub enum MediaError {
    /// A media group was built with a member count outside `2..=10`.
    InvalidGroupSize { len: usize },
    /// Rendering fragments to JSON failed.
    Json(serde_json::Error),
    /// Building a multipart part failed (e.g. an invalid MIME type).
    Multipart(reqwest::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::InvalidGroupSize { len } => write!(
                f,
                "media groups must include {MIN_GROUP_SIZE}-{MAX_GROUP_SIZE} items, got {len}"
            ),
            MediaError::Json(err) => write!(f, "failed to encode media fragment: {err}"),
            MediaError::Multipart(err) => write!(f, "failed to build upload part: {err}"),
        }
    }
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaError::InvalidGroupSize { .. } => None,
            MediaError::Json(err) => Some(err),
            MediaError::Multipart(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for MediaError {
    fn from(err: serde_json::Error) -> Self {
        MediaError::Json(err)
    }
}

impl From<reqwest::Error> for MediaError {
    fn from(err: reqwest::Error) -> Self {
        MediaError::Multipart(err)
    }
}

/// Result type for media operations.
pub type MediaResult<T> = std::result::Result<T, MediaError>;
