// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text format for manifolds.
//!
//! One grid row per line, one column per character:
//! - `S` marks the starting beam column. Scanning of that line stops there.
//! - `^` marks a splitter.
//! - `.` or whitespace is an empty cell.
//!
//! Lines without a splitter do not produce a row.
//!
//! ```
//! use manifold_sim::grid;
//!
//! let grid = grid::parse("..S..\n.....\n..^..\n").unwrap();
//! assert_eq!(grid.start_column(), 2);
//! assert_eq!(grid.rows_count(), 1);
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Grid, GridError};
use crate::bitset::{Bitset, WIDTH};

/// Start marker.
pub const START: char = 'S';

/// Splitter marker.
pub const SPLITTER: char = '^';

/// Read and parse the grid stored at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, GridError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse(&text)?;
    debug!(
        path = %path.display(),
        rows = grid.rows_count(),
        start = grid.start_column(),
        "loaded grid"
    );
    Ok(grid)
}

/// Parse a grid from its text form.
pub fn parse(text: &str) -> Result<Grid, GridError> {
    let mut start = Bitset::empty();
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let mut splitters = Bitset::empty();
        let mut has_splitter = false;

        for (column, found) in line.chars().enumerate() {
            if column >= WIDTH {
                return Err(GridError::LineTooWide {
                    line: index + 1,
                    width: line.chars().count(),
                    max: WIDTH,
                });
            }
            match found {
                START => {
                    start.toggle(column);
                    break;
                }
                SPLITTER => {
                    splitters.toggle(column);
                    has_splitter = true;
                }
                '.' => {}
                c if c.is_whitespace() => {}
                _ => {
                    return Err(GridError::UnexpectedCharacter {
                        line: index + 1,
                        column: column + 1,
                        found,
                    })
                }
            }
        }

        if has_splitter {
            rows.push(splitters);
        }
    }

    Grid::new(start, rows)
}
