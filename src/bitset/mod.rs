// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bitset type for representing sets of manifold columns.
//!
//! A Bitset is a fixed-width (WIDTH bits) vector where bit i represents
//! column i of the grid, column 0 being the leftmost.
//!
//! # Examples
//!
//! ```
//! use manifold_sim::bitset::Bitset;
//!
//! let mut beams = Bitset::empty();
//! beams.toggle(3);
//! beams.toggle(7);
//!
//! let spread = (beams << 1) | (beams >> 1);
//! assert_eq!(spread.iter_ones().collect::<Vec<_>>(), vec![2, 4, 6, 8]);
//! assert_eq!(spread.count_ones(), 4);
//! ```

pub mod constants;

pub use constants::{MAX_ROWS, WIDTH, WORDS, WORD_BITS};

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Shl, Shr};

/// A set of columns represented as a fixed-width bitset.
///
/// Bit i lives in word `i / 64` at position `i % 64`.
/// Every operation preserves the width; shifts discard bits pushed past
/// either edge and fill vacated positions with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bitset([u64; WORDS]);

impl Bitset {
    /// Create an empty bitset.
    pub const fn empty() -> Self {
        Self([0; WORDS])
    }

    /// Create a bitset with only `column` set.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    pub fn singleton(column: usize) -> Self {
        let mut set = Self::empty();
        set.toggle(column);
        set
    }

    /// Check whether `column` is set.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    pub fn get(&self, column: usize) -> bool {
        assert!(column < WIDTH, "Column out of range: {}", column);
        (self.0[column / WORD_BITS] >> (column % WORD_BITS)) & 1 != 0
    }

    /// Flip a single column.
    ///
    /// # Panics
    ///
    /// Panics if `column >= WIDTH`.
    pub fn toggle(&mut self, column: usize) {
        assert!(column < WIDTH, "Column out of range: {}", column);
        self.0[column / WORD_BITS] ^= 1 << (column % WORD_BITS);
    }

    /// Number of set columns (population count).
    pub fn count_ones(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Check if no column is set.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    /// Index of the leftmost set column, if any.
    pub fn lowest_set(&self) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, &word)| word != 0)
            .map(|(i, word)| i * WORD_BITS + word.trailing_zeros() as usize)
    }

    /// Iterate over set columns in ascending order.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(i, &word)| OnesIter {
            word,
            base: i * WORD_BITS,
        })
    }
}

/// Iterator over the set bits of one storage word.
struct OnesIter {
    word: u64,
    base: usize,
}

impl Iterator for OnesIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let bit = self.word.trailing_zeros() as usize;
        // Clear lowest set bit
        self.word &= self.word - 1;
        Some(self.base + bit)
    }
}

impl Default for Bitset {
    fn default() -> Self {
        Self::empty()
    }
}

impl BitAnd for Bitset {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self &= rhs;
        self
    }
}

impl BitAndAssign for Bitset {
    fn bitand_assign(&mut self, rhs: Self) {
        for (word, other) in self.0.iter_mut().zip(rhs.0) {
            *word &= other;
        }
    }
}

impl BitOr for Bitset {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self |= rhs;
        self
    }
}

impl BitOrAssign for Bitset {
    fn bitor_assign(&mut self, rhs: Self) {
        for (word, other) in self.0.iter_mut().zip(rhs.0) {
            *word |= other;
        }
    }
}

impl BitXor for Bitset {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for Bitset {
    fn bitxor_assign(&mut self, rhs: Self) {
        for (word, other) in self.0.iter_mut().zip(rhs.0) {
            *word ^= other;
        }
    }
}

impl Shl<usize> for Bitset {
    type Output = Self;

    /// Move every column i to i + n. Columns pushed past WIDTH - 1 are lost.
    fn shl(self, n: usize) -> Self {
        if n >= WIDTH {
            return Self::empty();
        }
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;
        let mut out = [0u64; WORDS];
        for i in word_shift..WORDS {
            let src = i - word_shift;
            out[i] = self.0[src] << bit_shift;
            if bit_shift > 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (WORD_BITS - bit_shift);
            }
        }
        Self(out)
    }
}

impl Shr<usize> for Bitset {
    type Output = Self;

    /// Move every column i to i - n. Columns pushed below 0 are lost.
    fn shr(self, n: usize) -> Self {
        if n >= WIDTH {
            return Self::empty();
        }
        let word_shift = n / WORD_BITS;
        let bit_shift = n % WORD_BITS;
        let mut out = [0u64; WORDS];
        for i in 0..WORDS - word_shift {
            let src = i + word_shift;
            out[i] = self.0[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < WORDS {
                out[i] |= self.0[src + 1] << (WORD_BITS - bit_shift);
            }
        }
        Self(out)
    }
}

impl fmt::Display for Bitset {
    /// Format all WIDTH bits as 0/1, highest column first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in (0..WIDTH).rev() {
            write!(f, "{}", if self.get(column) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromIterator<usize> for Bitset {
    fn from_iter<I: IntoIterator<Item = usize>>(columns: I) -> Self {
        let mut set = Self::empty();
        for column in columns {
            if !set.get(column) {
                set.toggle(column);
            }
        }
        set
    }
}
