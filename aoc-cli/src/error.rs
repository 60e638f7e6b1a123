//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Explicit input could not be loaded
    #[error("{0}")]
    Input(#[from] ArcInputError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Nothing matched the year/day/part/tag filters
    #[error("No solvers found matching the specified filters")]
    NoMatchingSolver,

    /// Some results had no usable input
    #[error("{failed} of {total} result(s) had no usable input")]
    InputsFailed { failed: usize, total: usize },

    /// Some results failed to parse or solve
    #[error("{failed} of {total} result(s) failed")]
    SolvesFailed { failed: usize, total: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

impl CliError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_)
            | CliError::Registration(_)
            | CliError::Io(_)
            | CliError::Executor(_) => 1,
            CliError::Input(_) | CliError::InputsFailed { .. } => 2,
            CliError::SolvesFailed { .. } => 3,
            CliError::NoMatchingSolver => 4,
        }
    }
}

/// Input resolution errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcInputError))]
pub enum InputError {
    /// No input file and no embedded input
    #[error("missing input for {year}/{day:02} (expected {})", path.display())]
    Missing { year: u16, day: u8, path: PathBuf },

    /// Input contains only whitespace
    #[error("empty input for {year}/{day:02}")]
    Empty { year: u16, day: u8 },

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading stdin failed
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}

/// Why a single result has no answer
///
/// One failed parse covers every part of its puzzle, so both variants are
/// shared rather than rebuilt per part.
#[derive(Error, Debug, Clone)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] ArcInputError),

    #[error(transparent)]
    Solver(Arc<aoc_solver::SolverError>),
}

impl From<aoc_solver::SolverError> for RunError {
    fn from(error: aoc_solver::SolverError) -> Self {
        RunError::Solver(Arc::new(error))
    }
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// The executor thread panicked
    #[error("Executor thread panicked")]
    Panicked,

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two errors into one `Multiple`, flattening nested lists
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                v1.iter().chain(v2).cloned().collect()
            }
            (_, ExecutorError::Multiple(v)) => std::iter::once(first.clone()).chain(v.iter().cloned()).collect(),
            (ExecutorError::Multiple(v), _) => v.iter().cloned().chain(std::iter::once(second.clone())).collect(),
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(error: &ArcExecutorError) -> usize {
        match error.inner() {
            ExecutorError::Multiple(v) => v.len(),
            _ => 1,
        }
    }

    #[test]
    fn test_combine_flattens() {
        let single = || ArcExecutorError::from(ExecutorError::ChannelSend);
        let pair = ArcExecutorError::combine(single(), single());
        assert_eq!(count(&pair), 2);

        let triple = ArcExecutorError::combine(pair.clone(), single());
        assert_eq!(count(&triple), 3);
        let triple = ArcExecutorError::combine(single(), pair.clone());
        assert_eq!(count(&triple), 3);
        assert_eq!(count(&ArcExecutorError::combine(pair.clone(), pair)), 4);
    }

    #[test]
    fn test_combine_opt() {
        let new = ArcExecutorError::from(ExecutorError::ThreadPool("x".into()));
        assert_eq!(count(&ArcExecutorError::combine_opt(None, new.clone())), 1);
        assert_eq!(count(&ArcExecutorError::combine_opt(Some(new.clone()), new)), 2);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Config("x".into()).exit_code(), 1);
        let input: ArcInputError = InputError::Empty { year: 2015, day: 1 }.into();
        assert_eq!(CliError::from(input).exit_code(), 2);
        assert_eq!(CliError::SolvesFailed { failed: 1, total: 2 }.exit_code(), 3);
        assert_eq!(CliError::NoMatchingSolver.exit_code(), 4);
    }

    #[test]
    fn test_input_error_messages() {
        let missing = InputError::Missing {
            year: 2015,
            day: 4,
            path: PathBuf::from("inputs/2015/day04.txt"),
        };
        assert_eq!(
            missing.to_string(),
            "missing input for 2015/04 (expected inputs/2015/day04.txt)"
        );
    }
}
