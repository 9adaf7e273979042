//! Credential resolution error types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::CredentialSourceKind;

/// Result type for credential resolution operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Errors that can occur during credential resolution.
///
/// Only [`AuthError::Configuration`] escapes [`resolve`](crate::resolve);
/// the other variants describe why an individual source was rejected and
/// end up as attempt reasons inside the configuration error.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No descriptor was present, or every present descriptor failed
    /// syntactic validation.
    #[error("no usable credential source: {0}")]
    Configuration(SourceAttempts),

    /// A descriptor file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Key material was present but syntactically invalid.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// A source requires a project id that was not configured.
    #[error("projectId is not set")]
    MissingProjectId,
}

impl AuthError {
    /// Creates a new invalid key material error.
    pub fn invalid_key_material(msg: impl Into<String>) -> Self {
        Self::InvalidKeyMaterial(msg.into())
    }

    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single rejected credential source and the syntactic reason.
#[derive(Debug, Clone)]
pub struct SourceAttempt {
    /// Which source was attempted.
    pub source: CredentialSourceKind,
    /// Why it was rejected.
    pub reason: String,
}

impl SourceAttempt {
    /// Records a rejected source with the error that rejected it.
    pub fn new(source: CredentialSourceKind, error: &AuthError) -> Self {
        Self {
            source,
            reason: error.to_string(),
        }
    }
}

/// Every credential source attempted during a failed resolution.
///
/// Rendered into the configuration error message so the user can see
/// which descriptors were considered and why each was rejected.
#[derive(Debug, Clone, Default)]
pub struct SourceAttempts(Vec<SourceAttempt>);

impl SourceAttempts {
    /// Creates an empty attempt list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an attempt.
    pub fn push(&mut self, attempt: SourceAttempt) {
        self.0.push(attempt);
    }

    /// Returns the recorded attempts.
    #[must_use]
    pub fn as_slice(&self) -> &[SourceAttempt] {
        &self.0
    }

    /// Returns `true` if no source was attempted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SourceAttempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no credential sources configured");
        }
        for (i, attempt) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{} ({})", attempt.source.as_str(), attempt.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_attempts_message() {
        let err = AuthError::Configuration(SourceAttempts::new());
        assert_eq!(
            err.to_string(),
            "no usable credential source: no credential sources configured"
        );
    }

    #[test]
    fn test_attempts_are_enumerated() {
        let mut attempts = SourceAttempts::new();
        attempts.push(SourceAttempt::new(
            CredentialSourceKind::ServiceAccountFile,
            &AuthError::invalid_key_material("not JSON"),
        ));
        attempts.push(SourceAttempt::new(
            CredentialSourceKind::ApplicationDefault,
            &AuthError::MissingProjectId,
        ));

        let message = AuthError::Configuration(attempts).to_string();
        assert!(message.contains("service_account_file (invalid key material: not JSON)"));
        assert!(message.contains("application_default (projectId is not set)"));
    }
}
