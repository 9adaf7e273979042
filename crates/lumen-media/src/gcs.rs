//! Google Cloud Storage object store.

use async_trait::async_trait;
use bytes::Bytes;
use opendal::{Operator, services};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::error::{StoreError, StoreResult};
use crate::store::ObjectStore;
use crate::uri::RemoteUri;

/// Google Cloud Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcsStoreConfig {
    /// Bucket name.
    pub bucket: String,
    /// Path prefix within the bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Service account credentials JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_json: Option<String>,
}

impl GcsStoreConfig {
    /// Creates a configuration for the given bucket.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            prefix: None,
            credentials_json: None,
        }
    }

    /// Sets the path prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the credentials JSON.
    #[must_use]
    pub fn with_credentials(mut self, credentials_json: impl Into<String>) -> Self {
        self.credentials_json = Some(credentials_json.into());
        self
    }
}

/// Object store backed by a Google Cloud Storage bucket.
#[derive(Clone)]
pub struct GcsStore {
    operator: Operator,
    bucket: String,
    prefix: Option<String>,
}

impl GcsStore {
    /// Creates a new store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Init`] when the operator cannot be built.
    pub fn new(config: GcsStoreConfig) -> StoreResult<Self> {
        let mut builder = services::Gcs::default().bucket(&config.bucket);

        if let Some(ref credentials) = config.credentials_json {
            builder = builder.credential(credentials);
        }

        let operator = Operator::new(builder)
            .map(|op| op.finish())
            .map_err(|e| StoreError::init(e.to_string()))?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            "GCS store initialized"
        );

        Ok(Self {
            operator,
            bucket: config.bucket,
            prefix: config.prefix,
        })
    }

    /// Returns the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}/{key}", prefix.trim_end_matches('/')),
            None => key.to_owned(),
        }
    }

    fn object_path(&self, uri: &str) -> StoreResult<String> {
        let parsed = RemoteUri::parse(uri)?;
        if parsed.bucket() != self.bucket {
            return Err(StoreError::invalid_uri(format!(
                "uri {uri} does not belong to bucket {}",
                self.bucket
            )));
        }
        Ok(parsed.path().to_owned())
    }
}

#[async_trait]
impl ObjectStore for GcsStore {
    async fn put_object(&self, key: &str, data: Bytes, mime_type: &str) -> StoreResult<String> {
        let path = self.full_key(key);
        let uri = RemoteUri::new(&self.bucket, &path).to_string();

        // Keys embed a content hash, so an existing object is the same bytes.
        if self.operator.exists(&path).await? {
            tracing::debug!(
                target: TRACING_TARGET,
                uri = %uri,
                "Object already present; skipping upload"
            );
            return Ok(uri);
        }

        tracing::debug!(
            target: TRACING_TARGET,
            uri = %uri,
            size = data.len(),
            mime_type = %mime_type,
            "Uploading object"
        );

        self.operator
            .write_with(&path, data)
            .content_type(mime_type)
            .await?;

        Ok(uri)
    }

    async fn object_exists(&self, uri: &str) -> StoreResult<bool> {
        let path = self.object_path(uri)?;
        Ok(self.operator.exists(&path).await?)
    }

    async fn get_object(&self, uri: &str) -> StoreResult<Bytes> {
        let path = self.object_path(uri)?;

        tracing::debug!(
            target: TRACING_TARGET,
            uri = %uri,
            "Downloading object"
        );

        Ok(self.operator.read(&path).await?.to_bytes())
    }
}

impl std::fmt::Debug for GcsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GcsStore")
            .field("bucket", &self.bucket)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = GcsStoreConfig::new("media-bucket")
            .with_prefix("media")
            .with_credentials("{}");
        assert_eq!(config.bucket, "media-bucket");
        assert_eq!(config.prefix.as_deref(), Some("media"));
    }

    #[test]
    fn test_full_key_applies_prefix() {
        let store = GcsStore::new(
            GcsStoreConfig::new("media-bucket").with_prefix("uploads/"),
        )
        .unwrap();
        assert_eq!(store.full_key("a.png"), "uploads/a.png");

        let bare = GcsStore::new(GcsStoreConfig::new("media-bucket")).unwrap();
        assert_eq!(bare.full_key("a.png"), "a.png");
    }

    #[test]
    fn test_object_path_rejects_foreign_bucket() {
        let store = GcsStore::new(GcsStoreConfig::new("media-bucket")).unwrap();
        assert!(store.object_path("gs://media-bucket/media/a.png").is_ok());
        assert!(matches!(
            store.object_path("gs://other/media/a.png"),
            Err(StoreError::InvalidUri(_))
        ));
    }
}
