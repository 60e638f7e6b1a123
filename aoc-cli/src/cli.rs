//! CLI argument parsing using clap

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Parallelization level for solver execution
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// No parallelization; execute all solvers sequentially in order
    Sequential,
    /// Parallelize across years; days and parts run sequentially within each year
    Year,
    /// Parallelize across year/day combinations; parts run sequentially (default)
    #[default]
    Day,
    /// Parallelize across all year/day/part combinations
    Part,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Input file for a single selected solver ("-" reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `{year}/day{DD}.txt` input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year, day, or part
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// List registered solvers instead of running them
    #[arg(long)]
    pub list: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.parallelize_by, ParallelizeBy::Day);
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_tags_and_verbosity() {
        let args = Args::try_parse_from(["aoc", "-t", "2015,grid", "-vv", "--parallelize-by", "part"]).unwrap();
        assert_eq!(args.tags, vec!["2015", "grid"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.parallelize_by, ParallelizeBy::Part);
    }

    #[test]
    fn test_day_out_of_range() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
    }
}
