// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Beam simulation over a [`Grid`].
//!
//! Two independent computations share the same per-row step:
//!
//! 1. [`count_splits`]: one forward sweep of the whole beam set, counting
//!    every beam/splitter coincidence.
//! 2. [`count_timelines`]: memoized recursion over (column, row) states from
//!    the start column, counting weighted paths to the bottom.
//!
//! Both take the grid by shared reference and keep all working state local,
//! so they can run concurrently on the same grid (see [`solve`]).

mod memo;
pub mod splits;
pub mod statistics;
pub mod timelines;

pub(crate) use memo::TimelineMemo;
pub use splits::{count_splits, count_splits_with_stats};
pub use statistics::{Counters, Statistics};
pub use timelines::{count_timelines, count_timelines_with_stats};

use num_bigint::BigUint;

use crate::bitset::Bitset;
use crate::grid::Grid;

/// Effect of one splitter row on a set of beams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStep {
    /// Beams that landed on a splitter.
    pub hit: Bitset,
    /// Beams that passed straight through.
    pub unsplit: Bitset,
    /// `hit << 1`: the half of each split beam moving to column + 1.
    pub rightward: Bitset,
    /// `hit >> 1`: the half of each split beam moving to column - 1.
    pub leftward: Bitset,
}

impl RowStep {
    pub fn apply(beams: Bitset, splitters: Bitset) -> Self {
        let hit = beams & splitters;
        // hit is a subset of beams, so xor removes exactly the hit columns
        let unsplit = beams ^ hit;
        Self {
            hit,
            unsplit,
            rightward: hit << 1,
            leftward: hit >> 1,
        }
    }

    /// Beams entering the next row (overlaps merged).
    pub fn beams(&self) -> Bitset {
        self.rightward | self.leftward | self.unsplit
    }

    /// Number of beams entering the next row at `column` (overlaps counted).
    pub fn weight(&self, column: usize) -> u32 {
        u32::from(self.unsplit.get(column))
            + u32::from(self.rightward.get(column))
            + u32::from(self.leftward.get(column))
    }
}

/// Both puzzle answers for one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub splits: u64,
    pub timelines: BigUint,
}

/// Compute both answers, each on its own rayon task.
pub fn solve(grid: &Grid) -> Answers {
    let (splits, timelines) = rayon::join(|| count_splits(grid), || count_timelines(grid));
    Answers { splits, timelines }
}
