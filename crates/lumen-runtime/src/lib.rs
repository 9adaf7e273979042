#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod context;
mod error;
mod grid;
mod id;

#[doc(hidden)]
pub mod prelude;

pub use context::{NodeContext, NodeContextBuilder};
pub use error::{NodeError, NodeResult};
pub use grid::{DEFAULT_COLUMNS, DEFAULT_PREFIX, GridError, GridSlot, PortGrid};
pub use id::ExecutionId;

/// Tracing target for node runtime operations.
pub const TRACING_TARGET: &str = "lumen_runtime";
