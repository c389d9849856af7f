// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The parsed manifold.
//!
//! A [`Grid`] holds the start beam bitset and one splitter bitset per
//! active row. It is built once by the [`loader`] and shared read-only by
//! every simulation afterwards.

pub mod errors;
pub mod loader;

pub use errors::GridError;
pub use loader::{load, parse};

use crate::bitset::{Bitset, MAX_ROWS};

/// Immutable splitter layout plus the starting beam column(s).
///
/// Invariants (checked in [`Grid::new`]):
/// - `start` has at least one column set
/// - `rows.len() <= MAX_ROWS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    start: Bitset,
    rows: Vec<Bitset>,
}

impl Grid {
    /// Build a grid from a start bitset and the active splitter rows, top to bottom.
    pub fn new(start: Bitset, rows: Vec<Bitset>) -> Result<Self, GridError> {
        if start.is_empty() {
            return Err(GridError::MissingStart);
        }
        if rows.len() > MAX_ROWS {
            return Err(GridError::TooManyRows {
                rows: rows.len(),
                max: MAX_ROWS,
            });
        }
        Ok(Self { start, rows })
    }

    /// Beam columns on the implicit row above row 0.
    pub fn start(&self) -> Bitset {
        self.start
    }

    /// Splitter bitsets for the active rows.
    pub fn rows(&self) -> &[Bitset] {
        &self.rows
    }

    pub fn rows_count(&self) -> usize {
        self.rows.len()
    }

    /// Column of the (first) starting beam.
    ///
    /// Shifts `start` right until bit 0 is set; the shift distance is the column.
    pub fn start_column(&self) -> usize {
        let mut start = self.start;
        let mut column = 0;
        // Terminates: start is never empty
        while !start.get(0) {
            start = start >> 1;
            column += 1;
        }
        debug_assert_eq!(self.start.lowest_set(), Some(column));
        column
    }
}
