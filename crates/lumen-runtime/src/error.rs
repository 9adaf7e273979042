//! Node runtime error types.

use thiserror::Error;

use crate::grid::GridError;

/// Result type for node runtime operations.
pub type NodeResult<T> = Result<T, NodeError>;

/// Errors that can occur while preparing or shaping a node execution.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Credential resolution failed.
    #[error("authentication error: {0}")]
    Auth(#[from] lumen_auth::AuthError),

    /// Media validation failed.
    #[error("media error: {0}")]
    Media(#[from] lumen_core::MediaError),

    /// Port grid configuration is invalid.
    #[error("port grid error: {0}")]
    Grid(#[from] GridError),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}
