// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Forward sweep counting beam splits.

use tracing::{debug, trace};

use super::{Counters, RowStep, Statistics};
use crate::grid::Grid;

/// Total number of beam/splitter coincidences over all rows.
pub fn count_splits(grid: &Grid) -> u64 {
    count_splits_with_stats(grid).0
}

/// As [`count_splits`], also returning the sweep counters.
///
/// Beams are merged per column: two beams arriving at the same splitter
/// count as one split. Beams shifted past either edge of the bitset are dropped.
pub fn count_splits_with_stats(grid: &Grid) -> (u64, Statistics) {
    let mut stats = Statistics::new();
    let mut beams = grid.start();
    let mut count = 0;

    for (row, &splitters) in grid.rows().iter().enumerate() {
        let step = RowStep::apply(beams, splitters);
        let splits = step.hit.count_ones() as u64;
        trace!(row, beams = beams.count_ones(), splits, "swept row");

        count += splits;
        stats.increment(Counters::RowsSwept);
        stats.add(Counters::SplitsObserved, splits);
        beams = step.beams();
    }

    debug!(splits = count, rows = grid.rows_count(), "counted splits");
    (count, stats)
}
