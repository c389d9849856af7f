// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Loading grids from files, including every fatal error path.

mod common;

use common::grid_file;
use manifold_sim::bitset::{MAX_ROWS, WIDTH};
use manifold_sim::{count_splits, count_timelines, grid, BigUint, GridError};

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = grid::load(&path).unwrap_err();
    assert!(matches!(err, GridError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn test_unexpected_character_is_fatal() {
    let file = grid_file("...S...\n...^...\n..^x^..\n");
    let err = grid::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        GridError::UnexpectedCharacter {
            line: 3,
            column: 4,
            found: 'x'
        }
    ));
}

#[test]
fn test_too_wide_is_fatal() {
    let contents = format!("S\n{}^\n", ".".repeat(WIDTH));
    let file = grid_file(&contents);
    let err = grid::load(file.path()).unwrap_err();
    assert!(matches!(err, GridError::LineTooWide { line: 2, .. }));
}

#[test]
fn test_too_many_rows_is_fatal() {
    let mut contents = String::from("S\n");
    for _ in 0..=MAX_ROWS {
        contents.push_str("^\n");
    }
    let file = grid_file(&contents);
    let err = grid::load(file.path()).unwrap_err();
    assert!(matches!(err, GridError::TooManyRows { .. }));
}

#[test]
fn test_blank_lines_do_not_count_as_rows() {
    let file = grid_file("..S..\n\n.....\n..^..\n\n");
    let grid = grid::load(file.path()).unwrap();
    assert_eq!(grid.rows_count(), 1);
    assert_eq!(count_splits(&grid), 1);
    assert_eq!(count_timelines(&grid), BigUint::from(2u32));
}

#[test]
fn test_start_only_grid() {
    let file = grid_file("....S....\n.........\n");
    let grid = grid::load(file.path()).unwrap();
    assert_eq!(grid.rows_count(), 0);
    assert_eq!(count_splits(&grid), 0);
    assert_eq!(count_timelines(&grid), BigUint::from(1u32));
}
