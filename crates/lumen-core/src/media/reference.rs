//! Media reference type.

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::media::MediaBytes;

/// The result of resolving a media item against the reference cache.
///
/// Always exactly one of the two variants: a remote URI usable by
/// downstream calls, or the literal payload for inline transmission.
/// Callers must branch on the variant rather than assume a URI exists;
/// the inline fallback is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaReference {
    /// Remote object reference produced by upload or reuse.
    Remote {
        /// Remote URI (e.g. `gs://bucket/media/clip_1a2b3c4d.mp4`).
        uri: String,
    },
    /// Literal payload to send directly.
    Inline {
        /// Raw payload bytes.
        data: MediaBytes,
        /// MIME type of the payload.
        mime_type: String,
    },
}

impl MediaReference {
    /// Creates a remote reference.
    pub fn remote(uri: impl Into<String>) -> Self {
        Self::Remote { uri: uri.into() }
    }

    /// Creates an inline reference.
    pub fn inline(data: impl Into<MediaBytes>, mime_type: impl Into<String>) -> Self {
        Self::Inline {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the variant name as a string.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Returns `true` for the remote variant.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Returns `true` for the inline variant.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    /// Returns the remote URI, if this is a remote reference.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        match self {
            Self::Remote { uri } => Some(uri),
            Self::Inline { .. } => None,
        }
    }

    /// Returns the payload and MIME type, if this is an inline reference.
    #[must_use]
    pub fn as_inline(&self) -> Option<(&MediaBytes, &str)> {
        match self {
            Self::Remote { .. } => None,
            Self::Inline { data, mime_type } => Some((data, mime_type)),
        }
    }
}
