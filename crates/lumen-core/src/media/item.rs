//! Media item type.

use std::sync::OnceLock;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use super::mime;
use crate::error::{MediaError, MediaResult};
use crate::media::{ContentFingerprint, MediaBytes};

/// Media family of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video.
    Video,
    /// Audio.
    Audio,
}

impl MediaKind {
    /// Classifies a MIME type into a media family.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        match mime_type.split('/').next() {
            Some("image") => Some(Self::Image),
            Some("video") => Some(Self::Video),
            Some("audio") => Some(Self::Audio),
            _ => None,
        }
    }
}

/// A media payload with its declared MIME type and content identity.
///
/// Produced by a calling node and handed to the media reference cache
/// for the duration of an upload attempt; the cache never mutates it.
/// The content fingerprint is computed lazily and memoized.
#[derive(Debug)]
pub struct MediaItem {
    data: MediaBytes,
    mime_type: String,
    /// Original filename, used as the stem of upload object keys.
    name: Option<String>,
    /// Caller-supplied source URL, when the payload is already addressable.
    source_url: Option<String>,
    fingerprint: OnceLock<ContentFingerprint>,
}

impl MediaItem {
    /// Creates a new media item from payload bytes and a MIME type.
    pub fn new(data: impl Into<MediaBytes>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
            name: None,
            source_url: None,
            fingerprint: OnceLock::new(),
        }
    }

    /// Creates a media item, sniffing the MIME type from magic bytes.
    ///
    /// Falls back to the declared MIME type when sniffing is inconclusive.
    pub fn with_detected_mime(data: impl Into<MediaBytes>, declared: impl Into<String>) -> Self {
        let data = data.into();
        let mime_type = mime::detect_mime_from_bytes(data.as_bytes())
            .map(str::to_owned)
            .unwrap_or_else(|| declared.into());
        Self {
            data,
            mime_type,
            name: None,
            source_url: None,
            fingerprint: OnceLock::new(),
        }
    }

    /// Sets the original filename.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the caller-supplied source URL.
    #[must_use]
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    /// Sets a precomputed content fingerprint.
    ///
    /// Skips hashing when the caller already knows the payload identity.
    #[must_use]
    pub fn with_fingerprint(self, fingerprint: ContentFingerprint) -> Self {
        let _ = self.fingerprint.set(fingerprint);
        self
    }

    /// Returns the payload bytes.
    #[must_use]
    pub fn data(&self) -> &MediaBytes {
        &self.data
    }

    /// Returns the payload as `Bytes`.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.data.to_bytes()
    }

    /// Returns the declared MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the media family for the declared MIME type.
    #[must_use]
    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime_type)
    }

    /// Returns the original filename, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the caller-supplied source URL, if any.
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the content fingerprint, computing it on first use.
    pub fn fingerprint(&self) -> ContentFingerprint {
        *self
            .fingerprint
            .get_or_init(|| ContentFingerprint::of(self.data.as_bytes()))
    }

    /// Validates the payload before any network interaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty or the MIME type is not
    /// a recognized media type.
    pub fn validate(&self) -> MediaResult<()> {
        if self.data.is_empty() {
            return Err(MediaError::invalid_media("payload is empty"));
        }
        if !mime::is_supported_mime(&self.mime_type) {
            // A generic declared type is acceptable when the bytes identify
            // themselves as a known media format.
            if mime::detect_mime_from_bytes(self.data.as_bytes()).is_none() {
                return Err(MediaError::unsupported_mime(&self.mime_type));
            }
        }
        Ok(())
    }

    /// Validates the payload size against a byte limit.
    ///
    /// # Errors
    ///
    /// Returns [`MediaError::PayloadTooLarge`] when the payload exceeds
    /// the limit. Downscaling oversized media is left to media-processing
    /// collaborators.
    pub fn ensure_within(&self, byte_limit: usize) -> MediaResult<()> {
        if self.size() > byte_limit {
            return Err(MediaError::payload_too_large(self.size(), byte_limit));
        }
        Ok(())
    }
}

impl Clone for MediaItem {
    fn clone(&self) -> Self {
        let fingerprint = OnceLock::new();
        if let Some(fp) = self.fingerprint.get() {
            let _ = fingerprint.set(*fp);
        }

        Self {
            data: self.data.clone(),
            mime_type: self.mime_type.clone(),
            name: self.name.clone(),
            source_url: self.source_url.clone(),
            fingerprint,
        }
    }
}
