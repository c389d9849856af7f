// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use manifold_sim::{count_splits, count_timelines, grid, solve, BigUint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    /// Total beam splits
    #[value(name = "1")]
    One,
    /// Total timelines
    #[value(name = "2")]
    Two,
    Both,
}

impl Part {
    fn splits(self) -> bool {
        matches!(self, Part::One | Part::Both)
    }

    fn timelines(self) -> bool {
        matches!(self, Part::Two | Part::Both)
    }
}

/// Count beam splits and timelines through manifold grids.
#[derive(Debug, Parser)]
#[command(name = "manifold", version, about)]
struct Cli {
    /// Grid files to solve
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Which answer to compute
    #[arg(long, value_enum, default_value_t = Part::Both)]
    part: Part,

    /// Fail unless the split count equals this value
    #[arg(long)]
    expect_splits: Option<u64>,

    /// Fail unless the timeline count equals this value
    #[arg(long)]
    expect_timelines: Option<BigUint>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Reject expectations for an answer that `--part` does not compute.
    fn validate(&self) -> Result<(), clap::Error> {
        if self.expect_splits.is_some() && !self.part.splits() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--expect-splits needs --part 1 or --part both",
            ));
        }
        if self.expect_timelines.is_some() && !self.part.timelines() {
            return Err(Cli::command().error(
                ErrorKind::ArgumentConflict,
                "--expect-timelines needs --part 2 or --part both",
            ));
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(err) = cli.validate() {
        err.exit();
    }

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    for path in &cli.inputs {
        let grid = grid::load(path).with_context(|| format!("loading {}", path.display()))?;

        let (splits, timelines) = match cli.part {
            Part::One => (Some(count_splits(&grid)), None),
            Part::Two => (None, Some(count_timelines(&grid))),
            Part::Both => {
                let answers = solve(&grid);
                (Some(answers.splits), Some(answers.timelines))
            }
        };

        check(path, "splits", splits.as_ref(), cli.expect_splits.as_ref())?;
        check(path, "timelines", timelines.as_ref(), cli.expect_timelines.as_ref())?;

        if cli.inputs.len() > 1 {
            println!("{}:", path.display());
        }
        if let Some(splits) = splits {
            println!("Total splits: {}", splits);
        }
        if let Some(timelines) = timelines {
            println!("Total timelines: {}", timelines);
        }
        info!(path = %path.display(), "solved");
    }

    Ok(())
}

/// Compare an answer against its expected value, if one was given.
fn check<T>(path: &Path, what: &str, actual: Option<&T>, expected: Option<&T>) -> Result<()>
where
    T: PartialEq + std::fmt::Display,
{
    if let (Some(actual), Some(expected)) = (actual, expected) {
        if actual != expected {
            bail!(
                "{}: expected {} {}, got {}",
                path.display(),
                expected,
                what,
                actual
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_expectation_for_skipped_part_is_rejected() {
        let cli = parse(&["manifold", "--part", "1", "--expect-timelines", "40", "in.txt"]);
        let err = cli.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let cli = parse(&["manifold", "--part", "2", "--expect-splits", "21", "in.txt"]);
        let err = cli.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_matching_expectations_are_accepted() {
        let cli = parse(&["manifold", "--part", "1", "--expect-splits", "21", "in.txt"]);
        assert!(cli.validate().is_ok());

        let cli = parse(&["manifold", "--expect-splits", "21", "--expect-timelines", "40", "in.txt"]);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.expect_timelines, Some(BigUint::from(40u32)));
    }

    #[test]
    fn test_check_reports_mismatch() {
        let path = Path::new("in.txt");
        assert!(check(path, "splits", Some(&21u64), Some(&21u64)).is_ok());
        assert!(check(path, "splits", Some(&21u64), None).is_ok());

        let err = check(path, "splits", Some(&20u64), Some(&21u64)).unwrap_err();
        assert_eq!(err.to_string(), "in.txt: expected 21 splits, got 20");
    }
}
