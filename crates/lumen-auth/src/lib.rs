#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;
mod identity;
mod resolver;
mod source;

#[doc(hidden)]
pub mod prelude;

pub use config::AuthConfig;
pub use error::{AuthError, AuthResult, SourceAttempt, SourceAttempts};
pub use identity::ResolvedIdentity;
pub use resolver::resolve;
pub use source::{
    CredentialHandle, CredentialSourceKind, ExternalAccountConfig, ServiceAccountKey,
};

/// Tracing target for credential resolution.
pub const TRACING_TARGET: &str = "lumen_auth";
