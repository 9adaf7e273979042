//! Resolved identity type.

use crate::source::{CredentialHandle, CredentialSourceKind};

/// Immutable result of credential resolution.
///
/// Constructed once per node execution (or once per process when the
/// configuration does not change) and discarded after the calls that
/// needed it complete. Carries no state across executions beyond what
/// the configuration specifies.
#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    source: CredentialSourceKind,
    project_id: String,
    location: String,
    handle: CredentialHandle,
}

impl ResolvedIdentity {
    pub(crate) fn new(
        source: CredentialSourceKind,
        project_id: impl Into<String>,
        location: impl Into<String>,
        handle: CredentialHandle,
    ) -> Self {
        Self {
            source,
            project_id: project_id.into(),
            location: location.into(),
            handle,
        }
    }

    /// Returns which credential source was chosen.
    #[must_use]
    pub fn source(&self) -> CredentialSourceKind {
        self.source
    }

    /// Returns the effective project id.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the effective region.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the opaque credential handle.
    #[must_use]
    pub fn handle(&self) -> &CredentialHandle {
        &self.handle
    }
}
