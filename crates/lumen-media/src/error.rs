//! Object store error types.

/// Result type for object store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during object store operations.
///
/// These never escape media resolution: the resolver absorbs every
/// store failure into the inline fallback. They surface only to callers
/// using an [`ObjectStore`](crate::ObjectStore) directly.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to initialize the store.
    #[error("store initialization failed: {0}")]
    Init(String),

    /// Object not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Upload failed.
    #[error("upload failed: {0}")]
    Upload(String),

    /// URI is malformed or does not belong to this store.
    #[error("invalid uri: {0}")]
    InvalidUri(String),

    /// Backend-specific error.
    #[error("backend error: {0}")]
    Backend(opendal::Error),
}

impl StoreError {
    /// Creates a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Creates a new not found error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Creates a new permission denied error.
    pub fn permission_denied(msg: impl Into<String>) -> Self {
        Self::PermissionDenied(msg.into())
    }

    /// Creates a new upload error.
    pub fn upload(msg: impl Into<String>) -> Self {
        Self::Upload(msg.into())
    }

    /// Creates a new invalid URI error.
    pub fn invalid_uri(msg: impl Into<String>) -> Self {
        Self::InvalidUri(msg.into())
    }
}

impl From<opendal::Error> for StoreError {
    fn from(err: opendal::Error) -> Self {
        use opendal::ErrorKind;

        match err.kind() {
            ErrorKind::NotFound => Self::NotFound(err.to_string()),
            ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            _ => Self::Backend(err),
        }
    }
}
