//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use lumen_auth::prelude::*;
//! ```

pub use crate::config::AuthConfig;
pub use crate::error::{AuthError, AuthResult};
pub use crate::identity::ResolvedIdentity;
pub use crate::resolver::resolve;
pub use crate::source::{CredentialHandle, CredentialSourceKind};
