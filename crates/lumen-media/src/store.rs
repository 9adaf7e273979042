//! Object store capability trait.

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::StoreResult;

/// The narrow capability set media resolution needs from a remote store.
///
/// Any implementation satisfying these three operations is acceptable;
/// this is deliberately not a general-purpose storage client. Timeouts
/// are the implementation's responsibility — callers treat a timeout
/// like any other failed operation.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Uploads an object and returns its remote URI.
    ///
    /// The key is relative to the store's configured location;
    /// implementations may skip the write when an identical key already
    /// exists, since keys embed a content hash.
    async fn put_object(&self, key: &str, data: Bytes, mime_type: &str) -> StoreResult<String>;

    /// Returns `true` if an object exists at the given URI.
    async fn object_exists(&self, uri: &str) -> StoreResult<bool>;

    /// Downloads the object at the given URI.
    async fn get_object(&self, uri: &str) -> StoreResult<Bytes>;
}
