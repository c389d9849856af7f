// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters gathered by one simulation run. Each run owns its own
//! [`Statistics`]; nothing is shared between runs.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Rows processed by the forward sweep.
    RowsSwept,
    /// Beam/splitter coincidences seen by the forward sweep.
    SplitsObserved,
    /// (column, row) states expanded by the timeline count.
    Expansions,
    /// (column, row) states answered from the memo table.
    MemoHits,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.get(Counters::RowsSwept), 0);
        assert_eq!(stats.get(Counters::MemoHits), 0);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut stats = Statistics::new();
        stats.increment(Counters::Expansions);
        stats.increment(Counters::Expansions);
        stats.add(Counters::SplitsObserved, 5);

        assert_eq!(stats.get(Counters::Expansions), 2);
        assert_eq!(stats.get(Counters::SplitsObserved), 5);
        assert_eq!(stats.get(Counters::RowsSwept), 0);
    }
}
