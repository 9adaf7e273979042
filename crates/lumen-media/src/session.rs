//! Session scope and per-session reference cache.

use std::collections::HashMap;
use std::sync::Arc;

use derive_more::{Display, From, Into};
use lumen_core::media::ContentFingerprint;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::TRACING_TARGET;

/// Opaque identifier partitioning cache entries by logical conversation
/// or run.
///
/// Supplied by the calling collaborator; this crate does not define how
/// it is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, From, Into)]
#[serde(transparent)]
pub struct SessionScope(String);

impl SessionScope {
    /// Creates a new session scope from an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionScope {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Per-session mapping from content fingerprint to remote URI.
///
/// Owned by whatever object represents the current session and dropped
/// with it; entries are additive for the session's lifetime and never
/// persisted. Entries are write-once: the first successful write for a
/// fingerprint establishes the mapping and later identical writes are
/// ignored. Clones share the same underlying map.
#[derive(Debug, Clone)]
pub struct SessionCache {
    scope: SessionScope,
    entries: Arc<RwLock<HashMap<ContentFingerprint, String>>>,
}

impl SessionCache {
    /// Creates an empty cache for the given session scope.
    pub fn new(scope: impl Into<SessionScope>) -> Self {
        Self {
            scope: scope.into(),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the session scope this cache belongs to.
    #[must_use]
    pub fn scope(&self) -> &SessionScope {
        &self.scope
    }

    /// Looks up the remote URI recorded for a fingerprint.
    pub async fn get(&self, fingerprint: &ContentFingerprint) -> Option<String> {
        self.entries.read().await.get(fingerprint).cloned()
    }

    /// Records a fingerprint-to-URI mapping unless one already exists.
    ///
    /// Returns the winning URI: the given one when this call established
    /// the mapping, or the previously recorded one when it lost the race.
    pub async fn insert_if_absent(
        &self,
        fingerprint: ContentFingerprint,
        uri: impl Into<String>,
    ) -> String {
        let mut entries = self.entries.write().await;
        match entries.get(&fingerprint) {
            Some(existing) => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    scope = %self.scope,
                    fingerprint = %fingerprint,
                    "Cache entry already present; keeping first write"
                );
                existing.clone()
            }
            None => {
                let uri = uri.into();
                entries.insert(fingerprint, uri.clone());
                uri
            }
        }
    }

    /// Returns the number of recorded entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if no entries are recorded.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
