//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use lumen_core::prelude::*;
//! ```

pub use crate::error::{MediaError, MediaResult};
pub use crate::media::{ContentFingerprint, MediaBytes, MediaItem, MediaKind, MediaReference};
