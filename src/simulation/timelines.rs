// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting timelines.
//!
//! A timeline is one path of a single beam from the start column to the
//! bottom of the grid, choosing a side at every splitter it meets. The number
//! of timelines grows exponentially with the number of rows, but the count
//! from a given (column, row) does not depend on how the beam got there, so
//! each state is expanded once and cached in a [`TimelineMemo`].
//!
//! Counts are arbitrary precision: a full-height grid of splitters yields
//! close to 2^MAX_ROWS timelines.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use super::{Counters, RowStep, Statistics, TimelineMemo};
use crate::bitset::Bitset;
use crate::grid::Grid;

/// Total number of weighted paths from the start column to the bottom row.
///
/// With several start columns set, the leftmost one is used.
pub fn count_timelines(grid: &Grid) -> BigUint {
    count_timelines_with_stats(grid).0
}

/// As [`count_timelines`], also returning the expansion counters.
pub fn count_timelines_with_stats(grid: &Grid) -> (BigUint, Statistics) {
    let mut expander = Expander {
        grid,
        memo: TimelineMemo::new(grid.rows_count()),
        stats: Statistics::new(),
    };
    let start = grid.start_column();
    let total = expander.expand(start, 0);

    debug!(
        timelines = %total,
        start,
        expansions = expander.stats.get(Counters::Expansions),
        memo_hits = expander.stats.get(Counters::MemoHits),
        memo_entries = expander.memo.len(),
        "counted timelines"
    );
    (total, expander.stats)
}

/// Per-call recursion state.
struct Expander<'a> {
    grid: &'a Grid,
    memo: TimelineMemo,
    stats: Statistics,
}

impl Expander<'_> {
    fn expand(&mut self, column: usize, row: usize) -> BigUint {
        if row == self.grid.rows_count() {
            return BigUint::one();
        }
        if let Some(cached) = self.memo.get(column, row) {
            self.stats.increment(Counters::MemoHits);
            return cached.clone();
        }
        self.stats.increment(Counters::Expansions);

        let step = RowStep::apply(Bitset::singleton(column), self.grid.rows()[row]);
        let mut total = BigUint::zero();
        for next in step.beams().iter_ones() {
            total += self.expand(next, row + 1) * step.weight(next);
        }

        self.memo.insert(column, row, total.clone());
        total
    }
}
