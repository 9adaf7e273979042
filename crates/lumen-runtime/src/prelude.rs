//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use lumen_runtime::prelude::*;
//! ```

pub use crate::context::NodeContext;
pub use crate::error::{NodeError, NodeResult};
pub use crate::grid::{GridSlot, PortGrid};
pub use crate::id::ExecutionId;
