//! Media validation error types.

/// Result type for media validation operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors raised by media validation before any network interaction.
///
/// Storage failures are deliberately not represented here: the media
/// reference cache absorbs them into the inline fallback instead of
/// surfacing them to callers.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Payload is malformed (e.g. empty).
    #[error("invalid media: {0}")]
    InvalidMedia(String),

    /// MIME type is not a recognized image, video, or audio type.
    #[error("unsupported mime type: {0}")]
    UnsupportedMime(String),

    /// Payload exceeds the configured byte limit.
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge {
        /// Actual payload size in bytes.
        size: usize,
        /// Configured limit in bytes.
        limit: usize,
    },
}

impl MediaError {
    /// Creates a new invalid media error.
    pub fn invalid_media(msg: impl Into<String>) -> Self {
        Self::InvalidMedia(msg.into())
    }

    /// Creates a new unsupported MIME type error.
    pub fn unsupported_mime(mime: impl Into<String>) -> Self {
        Self::UnsupportedMime(mime.into())
    }

    /// Creates a new payload too large error.
    pub fn payload_too_large(size: usize, limit: usize) -> Self {
        Self::PayloadTooLarge { size, limit }
    }
}
