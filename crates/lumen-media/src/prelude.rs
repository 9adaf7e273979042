//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use lumen_media::prelude::*;
//! ```

pub use crate::error::{StoreError, StoreResult};
#[cfg(feature = "gcs")]
pub use crate::gcs::{GcsStore, GcsStoreConfig};
pub use crate::resolver::MediaResolver;
pub use crate::session::{SessionCache, SessionScope};
pub use crate::store::ObjectStore;
pub use crate::uri::RemoteUri;
