// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Beam propagation through a tachyon manifold of splitters.
//!
//! A manifold is a text grid: a start marker `S` on top and rows of
//! splitters `^` below. A beam travels down from `S`; when it meets a
//! splitter it is replaced by two beams in the neighbouring columns.
//!
//! # Architecture
//!
//! The implementation is strictly layered:
//!
//! ## Grid (immutable)
//!
//! Built once by [`grid::load`] / [`grid::parse`]:
//! - one [`Bitset`] of start columns
//! - one [`Bitset`] of splitter columns per row that holds a splitter
//!
//! ## Simulation (per call)
//!
//! Pure functions over a shared `&Grid`, each owning its working state:
//! - [`count_splits`]: forward sweep, one set of bitset operations per row
//! - [`count_timelines`]: recursion over (column, row) with a memo table,
//!   counting in arbitrary precision ([`BigUint`])
//!
//! Because the grid is never mutated, both answers can be computed in
//! parallel ([`simulation::solve`]).
//!
//! # Example
//!
//! ```
//! use manifold_sim::{count_splits, count_timelines, grid, BigUint};
//!
//! let grid = grid::parse("..S..\n..^..\n.^.^.\n").unwrap();
//! assert_eq!(count_splits(&grid), 3);
//! assert_eq!(count_timelines(&grid), BigUint::from(4u32));
//! ```

pub mod bitset;
pub mod grid;
pub mod simulation;

// Re-export commonly used types
pub use bitset::Bitset;
pub use grid::{Grid, GridError};
pub use num_bigint::BigUint;
pub use simulation::{count_splits, count_timelines, solve, Answers};
