//! Remote object URI type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// URI scheme for object store references.
const SCHEME: &str = "gs";

/// A parsed `gs://bucket/path` object URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUri {
    bucket: String,
    path: String,
}

impl RemoteUri {
    /// Creates a URI from a bucket and object path.
    pub fn new(bucket: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            path: path.into(),
        }
    }

    /// Parses a `gs://bucket/path` string.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUri`] when the scheme is wrong or
    /// the bucket or object path is missing.
    pub fn parse(uri: &str) -> StoreResult<Self> {
        let rest = uri
            .strip_prefix("gs://")
            .ok_or_else(|| StoreError::invalid_uri(format!("expected gs:// scheme: {uri}")))?;

        let (bucket, path) = rest
            .split_once('/')
            .ok_or_else(|| StoreError::invalid_uri(format!("missing object path: {uri}")))?;

        if bucket.is_empty() || path.is_empty() {
            return Err(StoreError::invalid_uri(format!(
                "empty bucket or object path: {uri}"
            )));
        }

        Ok(Self::new(bucket, path))
    }

    /// Returns the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the object path within the bucket.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RemoteUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}://{}/{}", self.bucket, self.path)
    }
}

impl FromStr for RemoteUri {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
