//! Content fingerprint type.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

/// Stable SHA-256 identity of a media payload.
///
/// Used as the cache lookup key by the media reference cache: two
/// payloads with identical bytes always produce identical fingerprints.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentFingerprint([u8; 32]);

impl ContentFingerprint {
    /// Computes the fingerprint of the given payload bytes.
    #[must_use]
    pub fn of(data: impl AsRef<[u8]>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data.as_ref());
        Self(hasher.finalize().into())
    }

    /// Creates a fingerprint from a raw digest.
    #[must_use]
    pub const fn from_digest(digest: [u8; 32]) -> Self {
        Self(digest)
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the full hex encoding of the digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the first 8 hex characters of the digest.
    ///
    /// Used as the content-hash suffix in upload object keys.
    #[must_use]
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ContentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentFingerprint({})", self.short_hex())
    }
}

impl FromStr for ContentFingerprint {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = hex::decode(s)?;
        let digest: [u8; 32] = decoded
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let a = ContentFingerprint::of(b"same bytes");
        let b = ContentFingerprint::of(b"same bytes");
        assert_eq!(a, b);
        assert_eq!(a.to_hex(), b.to_hex());
    }

    #[test]
    fn test_fingerprint_differs_for_different_bytes() {
        let a = ContentFingerprint::of(b"one");
        let b = ContentFingerprint::of(b"two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_short_hex_length() {
        let fp = ContentFingerprint::of(b"payload");
        assert_eq!(fp.short_hex().len(), 8);
        assert!(fp.to_hex().starts_with(&fp.short_hex()));
    }

    #[test]
    fn test_roundtrip_from_str() {
        let fp = ContentFingerprint::of(b"payload");
        let parsed: ContentFingerprint = fp.to_hex().parse().unwrap();
        assert_eq!(fp, parsed);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert!("not-hex".parse::<ContentFingerprint>().is_err());
        assert!("abcd".parse::<ContentFingerprint>().is_err());
    }
}
