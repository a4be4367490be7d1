//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::grid::{validate_axis, Axis};

/// Terminal maze generator with an animated breadth-first solver.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about)]
pub struct Cli {
    /// Maze width in cells; must be odd and at least 3.
    #[arg(long, default_value_t = 41, value_parser = parse_width)]
    pub width: usize,
    /// Maze height in cells; must be odd and at least 3.
    #[arg(long, default_value_t = 21, value_parser = parse_height)]
    pub height: usize,
    /// Seed for the first maze. A random one is drawn when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Milliseconds to wait for input on every frame.
    #[arg(long, default_value_t = 10)]
    pub frame_ms: u64,
    /// File to write logs to. Nothing is logged when omitted.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Parses a maze width, applying the same rules as maze generation.
fn parse_width(value: &str) -> Result<usize, String> {
    parse_extent(Axis::Width, value)
}

/// Parses a maze height, applying the same rules as maze generation.
fn parse_height(value: &str) -> Result<usize, String> {
    parse_extent(Axis::Height, value)
}

/// Parses and validates one extent along `axis`.
fn parse_extent(axis: Axis, value: &str) -> Result<usize, String> {
    let extent = value
        .parse::<usize>()
        .map_err(|err| format!("invalid {axis} `{value}`: {err}"))?;

    validate_axis(axis, extent).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mazegen"]).expect("no arguments should parse");

        assert_eq!(cli.width, 41);
        assert_eq!(cli.height, 21);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.frame_ms, 10);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "mazegen",
            "--width",
            "11",
            "--height",
            "7",
            "--seed",
            "42",
            "--frame-ms",
            "16",
            "--log-file",
            "maze.log",
        ])
        .expect("valid arguments should parse");

        assert_eq!(cli.width, 11);
        assert_eq!(cli.height, 7);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.frame_ms, 16);
        assert_eq!(cli.log_file, Some(PathBuf::from("maze.log")));
    }

    #[test]
    fn test_even_width_is_rejected() {
        assert!(Cli::try_parse_from(["mazegen", "--width", "40"]).is_err());
    }

    #[test]
    fn test_small_or_negative_height_is_rejected() {
        assert!(Cli::try_parse_from(["mazegen", "--height", "1"]).is_err());
        assert!(Cli::try_parse_from(["mazegen", "--height", "-3"]).is_err());
    }

    #[test]
    fn test_parse_extent_messages() {
        assert_eq!(
            parse_extent(Axis::Width, "8"),
            Err("maze width must be odd, got 8".to_owned())
        );
        assert!(parse_extent(Axis::Height, "abc")
            .expect_err("non-numeric height must fail")
            .starts_with("invalid height `abc`"));
    }
}
