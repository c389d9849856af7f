// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo table for timeline counts.

use num_bigint::BigUint;

use crate::bitset::WIDTH;

/// Cached timeline counts keyed by (column, row).
///
/// Dense table of `WIDTH * rows` cells. An absent entry is `None`, so a
/// cached count of zero is distinguishable from "not yet computed".
/// Scoped to a single timeline count and dropped afterwards.
#[derive(Debug, Clone)]
pub(crate) struct TimelineMemo {
    cells: Vec<Option<BigUint>>,
}

impl TimelineMemo {
    /// Create an empty table for a grid with `rows` splitter rows.
    pub(crate) fn new(rows: usize) -> Self {
        Self {
            cells: vec![None; rows * WIDTH],
        }
    }

    fn index(column: usize, row: usize) -> usize {
        row * WIDTH + column
    }

    pub(crate) fn get(&self, column: usize, row: usize) -> Option<&BigUint> {
        self.cells[Self::index(column, row)].as_ref()
    }

    pub(crate) fn insert(&mut self, column: usize, row: usize, count: BigUint) {
        self.cells[Self::index(column, row)] = Some(count);
    }

    /// Number of cached entries.
    pub(crate) fn len(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
