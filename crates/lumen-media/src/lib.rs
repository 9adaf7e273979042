#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
#[cfg(feature = "gcs")]
mod gcs;
mod resolver;
mod session;
mod store;
mod uri;

#[doc(hidden)]
pub mod prelude;

pub use error::{StoreError, StoreResult};
#[cfg(feature = "gcs")]
pub use gcs::{GcsStore, GcsStoreConfig};
pub use resolver::MediaResolver;
pub use session::{SessionCache, SessionScope};
pub use store::ObjectStore;
pub use uri::RemoteUri;

/// Tracing target for media resolution operations.
pub const TRACING_TARGET: &str = "lumen_media";
