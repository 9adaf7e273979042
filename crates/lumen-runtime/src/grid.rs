//! Dynamic output port grid allocation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default column width for output grids.
pub const DEFAULT_COLUMNS: usize = 2;

/// Default slot name prefix.
pub const DEFAULT_PREFIX: &str = "item";

/// Errors that can occur when configuring a port grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Column width below 1.
    #[error("columns must be at least 1, got {0}")]
    InvalidColumns(usize),
}

/// A named output position derived from an item's index.
///
/// `row` and `column` are 0-based; the slot name is 1-based for
/// human-facing port labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSlot {
    /// Item index the slot was derived from.
    pub index: usize,
    /// Grid row (0-based).
    pub row: usize,
    /// Grid column (0-based).
    pub column: usize,
    /// Stable port identifier, e.g. `item_1_2`.
    pub name: String,
}

/// Deterministic allocator for grid-shaped output ports.
///
/// A pure function of `(count, columns, prefix)`: the slot for item
/// index `i` depends only on the grid configuration, never on prior
/// allocations or the total count. Re-allocating with a larger count
/// therefore reproduces identical earlier slot names, and trailing
/// items can be added or removed without renaming existing ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortGrid {
    columns: usize,
    prefix: String,
}

impl PortGrid {
    /// Creates a grid with the given column width.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidColumns`] when `columns` is below 1.
    pub fn new(columns: usize) -> Result<Self, GridError> {
        if columns < 1 {
            return Err(GridError::InvalidColumns(columns));
        }
        Ok(Self {
            columns,
            prefix: DEFAULT_PREFIX.to_owned(),
        })
    }

    /// Sets the slot name prefix (e.g. `video` for `video_1_1`).
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Returns the column width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the slot name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the slot for a single item index.
    #[must_use]
    pub fn slot(&self, index: usize) -> GridSlot {
        let row = index / self.columns;
        let column = index % self.columns;
        GridSlot {
            index,
            row,
            column,
            name: format!("{}_{}_{}", self.prefix, row + 1, column + 1),
        }
    }

    /// Returns the stable port name for a single item index.
    #[must_use]
    pub fn slot_name(&self, index: usize) -> String {
        self.slot(index).name
    }

    /// Allocates slots for `count` items, in index order.
    ///
    /// `count = 0` produces an empty sequence: a valid state meaning
    /// "no results yet", not an error.
    #[must_use]
    pub fn allocate(&self, count: usize) -> Vec<GridSlot> {
        (0..count).map(|index| self.slot(index)).collect()
    }

    /// Pairs each item with its slot, in index order.
    #[must_use]
    pub fn assign<'a, T>(&self, items: &'a [T]) -> Vec<(GridSlot, &'a T)> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (self.slot(index), item))
            .collect()
    }
}

impl Default for PortGrid {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            prefix: DEFAULT_PREFIX.to_owned(),
        }
    }
}
