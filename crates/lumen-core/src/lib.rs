#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
pub mod media;

#[doc(hidden)]
pub mod prelude;

pub use error::{MediaError, MediaResult};

/// Tracing target for media data-model operations.
pub const TRACING_TARGET: &str = "lumen_core";
