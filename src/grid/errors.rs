// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for grid loading.

use std::io;
use std::path::PathBuf;
use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Errors that can occur while building a [`Grid`](super::Grid).
///
/// Every variant is fatal: a failed load never yields a partial grid.
#[derive(Debug, Error, EnumCountMacro)]
pub enum GridError {
    /// Input file could not be read.
    #[error("unable to read file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A character outside `S`, `^` and blanks. Line and column are 1-based.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        found: char,
    },

    /// A line has more columns than a bitset can hold.
    #[error("line {line} is {width} columns wide (max {max})")]
    LineTooWide { line: usize, width: usize, max: usize },

    /// More splitter rows than the grid can hold.
    #[error("grid has {rows} splitter rows (max {max})")]
    TooManyRows { rows: usize, max: usize },

    /// No start marker survived parsing.
    #[error("grid has no start marker 'S'")]
    MissingStart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_display() {
        let err = GridError::UnexpectedCharacter {
            line: 3,
            column: 7,
            found: '#',
        };
        assert_eq!(err.to_string(), "unexpected character '#' at line 3, column 7");

        let err = GridError::LineTooWide {
            line: 1,
            width: 300,
            max: 256,
        };
        assert_eq!(err.to_string(), "line 1 is 300 columns wide (max 256)");
    }

    #[test]
    fn test_io_source() {
        use std::error::Error as _;

        let err = GridError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "unable to read file missing.txt");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_variant_count() {
        assert_eq!(GridError::COUNT, 5);
    }
}
