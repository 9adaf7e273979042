//! Media reference resolution.

use std::sync::Arc;

use lumen_core::media::{MediaItem, MediaReference, mime};
use url::Url;

use crate::TRACING_TARGET;
use crate::session::SessionCache;
use crate::store::ObjectStore;

/// Resolves media items into remote or inline references.
///
/// The store is optional: without one every miss falls back to inline
/// transmission. Storage failures never propagate to the caller —
/// upload/reuse is an optimization, not a correctness requirement — so
/// a single failed attempt immediately degrades to inline rather than
/// retrying inside the node-execution path.
#[derive(Clone, Default)]
pub struct MediaResolver {
    store: Option<Arc<dyn ObjectStore>>,
}

impl std::fmt::Debug for MediaResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaResolver")
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

impl MediaResolver {
    /// Creates a resolver with no remote store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver backed by the given store.
    #[must_use]
    pub fn with_store(store: Arc<dyn ObjectStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Returns `true` when a remote store is configured.
    #[must_use]
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolves a media item into a reference within a session scope.
    ///
    /// Resolution order: caller-supplied public URL passthrough, cache
    /// hit by content fingerprint, upload to the remote store, inline
    /// fallback. Only the upload step touches the network, and its
    /// failure is absorbed into the fallback.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the payload is empty or its MIME
    /// type is unrecognized; never errors for storage failures.
    pub async fn resolve(
        &self,
        item: &MediaItem,
        session: &SessionCache,
    ) -> lumen_core::MediaResult<MediaReference> {
        item.validate()?;

        // Publicly addressable content is used as-is, never re-uploaded.
        if let Some(source_url) = item.source_url() {
            if is_publicly_addressable(source_url) {
                tracing::debug!(
                    target: TRACING_TARGET,
                    url = %source_url,
                    "Using caller-supplied public URL"
                );
                return Ok(MediaReference::remote(source_url));
            }
        }

        let fingerprint = item.fingerprint();

        if let Some(existing) = session.get(&fingerprint).await {
            tracing::debug!(
                target: TRACING_TARGET,
                scope = %session.scope(),
                fingerprint = %fingerprint,
                uri = %existing,
                "Reusing uploaded media"
            );
            return Ok(MediaReference::remote(existing));
        }

        if let Some(store) = &self.store {
            let key = object_key(item);
            match store
                .put_object(&key, item.to_bytes(), item.mime_type())
                .await
            {
                Ok(uri) => {
                    // Concurrent uploads for the same fingerprint may both
                    // land; the first recorded entry wins.
                    let winner = session.insert_if_absent(fingerprint, uri).await;
                    tracing::debug!(
                        target: TRACING_TARGET,
                        scope = %session.scope(),
                        fingerprint = %fingerprint,
                        uri = %winner,
                        "Media uploaded"
                    );
                    return Ok(MediaReference::remote(winner));
                }
                Err(err) => {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        fingerprint = %fingerprint,
                        error = %err,
                        "Upload failed; sending media inline"
                    );
                }
            }
        } else {
            tracing::debug!(
                target: TRACING_TARGET,
                fingerprint = %fingerprint,
                "No remote store configured; sending media inline"
            );
        }

        Ok(MediaReference::inline(
            item.data().clone(),
            item.mime_type(),
        ))
    }
}

/// Builds the upload key for a media item: the filename stem plus a
/// content-hash suffix, under the shared `media/` prefix.
pub(crate) fn object_key(item: &MediaItem) -> String {
    let (stem, name_ext) = match item.name() {
        Some(name) => match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
            _ => (name, None),
        },
        None => ("media", None),
    };

    let extension = name_ext
        .or_else(|| mime::extension_for_mime(item.mime_type()))
        .unwrap_or("bin");

    format!("media/{stem}_{}.{extension}", item.fingerprint().short_hex())
}

/// Returns `true` for URLs downstream services can fetch themselves.
///
/// Loopback URLs point at the host engine's static file server and must
/// go through upload instead. Object URIs count as addressable.
fn is_publicly_addressable(source_url: &str) -> bool {
    let Ok(url) = Url::parse(source_url) else {
        return false;
    };

    match url.scheme() {
        "gs" => true,
        "http" | "https" => !matches!(
            url.host_str(),
            None | Some("localhost") | Some("127.0.0.1") | Some("[::1]") | Some("::1")
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;
    use lumen_core::MediaError;

    use super::*;
    use crate::error::{StoreError, StoreResult};

    const PNG_HEADER: [u8; 9] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

    /// In-memory store that counts uploads and can be told to fail.
    #[derive(Default)]
    struct MockStore {
        uploads: AtomicUsize,
        fail: bool,
    }

    impl MockStore {
        fn failing() -> Self {
            Self {
                uploads: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn upload_count(&self) -> usize {
            self.uploads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ObjectStore for MockStore {
        async fn put_object(
            &self,
            key: &str,
            _data: Bytes,
            _mime_type: &str,
        ) -> StoreResult<String> {
            if self.fail {
                return Err(StoreError::upload("quota exceeded"));
            }
            self.uploads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("gs://mock/{key}"))
        }

        async fn object_exists(&self, _uri: &str) -> StoreResult<bool> {
            Ok(!self.fail)
        }

        async fn get_object(&self, uri: &str) -> StoreResult<Bytes> {
            Err(StoreError::not_found(uri))
        }
    }

    fn png_item() -> MediaItem {
        MediaItem::new(PNG_HEADER.as_slice(), "image/png").with_name("frame.png")
    }

    #[tokio::test]
    async fn test_public_url_passes_through() {
        let store = Arc::new(MockStore::default());
        let resolver = MediaResolver::with_store(store.clone());
        let session = SessionCache::new("run-1");

        let item = png_item().with_source_url("https://example.com/frame.png");
        let reference = resolver.resolve(&item, &session).await.unwrap();

        assert_eq!(reference.uri(), Some("https://example.com/frame.png"));
        assert_eq!(store.upload_count(), 0);
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_localhost_url_is_uploaded() {
        let store = Arc::new(MockStore::default());
        let resolver = MediaResolver::with_store(store.clone());
        let session = SessionCache::new("run-1");

        let item = png_item().with_source_url("http://localhost:8124/static/frame.png");
        let reference = resolver.resolve(&item, &session).await.unwrap();

        assert!(reference.is_remote());
        assert_eq!(store.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_second_resolution_reuses_upload() {
        let store = Arc::new(MockStore::default());
        let resolver = MediaResolver::with_store(store.clone());
        let session = SessionCache::new("run-1");

        let first = resolver.resolve(&png_item(), &session).await.unwrap();
        let second = resolver.resolve(&png_item(), &session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(store.upload_count(), 1);
    }

    #[tokio::test]
    async fn test_different_sessions_upload_separately() {
        let store = Arc::new(MockStore::default());
        let resolver = MediaResolver::with_store(store.clone());

        let first = SessionCache::new("run-1");
        let second = SessionCache::new("run-2");

        resolver.resolve(&png_item(), &first).await.unwrap();
        resolver.resolve(&png_item(), &second).await.unwrap();

        assert_eq!(store.upload_count(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_falls_back_to_inline() {
        let resolver = MediaResolver::with_store(Arc::new(MockStore::failing()));
        let session = SessionCache::new("run-1");

        let item = png_item();
        let reference = resolver.resolve(&item, &session).await.unwrap();

        let (data, mime_type) = reference.as_inline().expect("inline fallback");
        assert_eq!(data.as_bytes(), PNG_HEADER);
        assert_eq!(mime_type, "image/png");
        // A failed upload records nothing.
        assert!(session.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_store_falls_back_to_inline() {
        let resolver = MediaResolver::new();
        let session = SessionCache::new("run-1");

        let reference = resolver.resolve(&png_item(), &session).await.unwrap();
        assert!(reference.is_inline());
    }

    #[tokio::test]
    async fn test_validation_errors_surface_before_network() {
        let store = Arc::new(MockStore::default());
        let resolver = MediaResolver::with_store(store.clone());
        let session = SessionCache::new("run-1");

        let empty = MediaItem::new(Vec::<u8>::new(), "image/png");
        assert!(matches!(
            resolver.resolve(&empty, &session).await,
            Err(MediaError::InvalidMedia(_))
        ));

        let unknown = MediaItem::new(b"text".as_slice(), "application/pdf");
        assert!(matches!(
            resolver.resolve(&unknown, &session).await,
            Err(MediaError::UnsupportedMime(_))
        ));

        assert_eq!(store.upload_count(), 0);
    }

    #[test]
    fn test_object_key_embeds_content_hash() {
        let item = png_item();
        let key = object_key(&item);
        let short = item.fingerprint().short_hex();
        assert_eq!(key, format!("media/frame_{short}.png"));
    }

    #[test]
    fn test_object_key_defaults() {
        let item = MediaItem::new(PNG_HEADER.as_slice(), "image/png");
        let key = object_key(&item);
        assert!(key.starts_with("media/media_"));
        assert!(key.ends_with(".png"));

        let unnamed = MediaItem::new(b"data".as_slice(), "application/x-unknown");
        assert!(object_key(&unnamed).ends_with(".bin"));
    }

    #[test]
    fn test_publicly_addressable() {
        assert!(is_publicly_addressable("https://example.com/a.png"));
        assert!(is_publicly_addressable("gs://bucket/media/a.png"));
        assert!(!is_publicly_addressable("http://localhost:8124/a.png"));
        assert!(!is_publicly_addressable("http://127.0.0.1/a.png"));
        assert!(!is_publicly_addressable("not a url"));
        assert!(!is_publicly_addressable("file:///tmp/a.png"));
    }
}
