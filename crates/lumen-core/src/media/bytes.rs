//! Payload byte container.

use std::ops::Deref;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A wrapper around `Bytes` for media payloads.
///
/// Cheap to clone: `Bytes` is reference counted internally, so media
/// payloads can be shared between a node and the reference cache
/// without copying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaBytes(Bytes);

impl MediaBytes {
    /// Creates a new `MediaBytes` from raw bytes.
    #[must_use]
    pub fn new(bytes: Bytes) -> Self {
        Self(bytes)
    }

    /// Returns the size of the payload in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the payload as a byte slice.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the underlying `Bytes`.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }

    /// Consumes and returns the underlying `Bytes`.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}

impl Deref for MediaBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for MediaBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for MediaBytes {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for MediaBytes {
    fn from(vec: Vec<u8>) -> Self {
        Self(Bytes::from(vec))
    }
}

impl From<&[u8]> for MediaBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_bytes_basics() {
        let bytes = MediaBytes::from(b"payload".as_slice());
        assert_eq!(bytes.len(), 7);
        assert!(!bytes.is_empty());
        assert_eq!(bytes.as_bytes(), b"payload");
    }

    #[test]
    fn test_media_bytes_empty() {
        let bytes = MediaBytes::default();
        assert!(bytes.is_empty());
        assert_eq!(bytes.len(), 0);
    }

    #[test]
    fn test_media_bytes_cheap_clone() {
        let original = MediaBytes::from(vec![1u8, 2, 3]);
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert_eq!(cloned.into_bytes(), Bytes::from(vec![1u8, 2, 3]));
    }
}
