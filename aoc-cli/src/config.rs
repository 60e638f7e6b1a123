//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Where an explicitly requested input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplicitInput {
    Stdin,
    File(PathBuf),
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input for the single selected solver, overriding the input directory
    pub input: Option<ExplicitInput>,
    /// Root of the `{year}/day{DD}.txt` tree
    pub input_dir: PathBuf,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// List solvers instead of running
    pub list: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let thread_count = match args.threads {
            Some(0) => return Err(CliError::Config("--threads must be at least 1".to_string())),
            Some(n) => n,
            None => num_cpus(),
        };

        let input = args.input.map(|path| {
            if path.as_os_str() == "-" {
                ExplicitInput::Stdin
            } else {
                ExplicitInput::File(expand_tilde(&path))
            }
        });

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input,
            input_dir: expand_tilde(&args.input_dir),
            thread_count,
            parallelize_by: args.parallelize_by,
            list: args.list,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("inputs/~")), PathBuf::from("inputs/~"));
        assert_eq!(expand_tilde(Path::new("~user")), PathBuf::from("~user"));
    }

    #[test]
    fn test_stdin_input() {
        let stdin = config(&["aoc", "--input", "-"]).unwrap();
        assert_eq!(stdin.input, Some(ExplicitInput::Stdin));

        let file = config(&["aoc", "--input", "day01.txt"]).unwrap();
        assert_eq!(file.input, Some(ExplicitInput::File(PathBuf::from("day01.txt"))));
    }

    #[test]
    fn test_thread_count() {
        assert!(config(&["aoc"]).unwrap().thread_count >= 1);
        assert_eq!(config(&["aoc", "--threads", "3"]).unwrap().thread_count, 3);
        assert!(matches!(config(&["aoc", "--threads", "0"]), Err(CliError::Config(_))));
    }
}
