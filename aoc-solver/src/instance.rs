//! Parsed puzzle instances and their timed, type-erased interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One answered part, with its wall-clock timing
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
    /// Time spent parsing, attached to the first part answered after the parse
    pub parse_duration: Option<TimeDelta>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Parsed input for one year-day problem, ready to solve parts against.
///
/// All parts share one `SharedData` value, so solving part 2 after part 1
/// on the same instance sees whatever part 1 cached. The parse time is
/// handed out once, so callers solving several parts count it once.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
    parse_reported: bool,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long the parse took
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
            parse_reported: false,
        })
    }

    /// Read-only access to the parsed shared data
    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// Type-erased interface over any [`SolverInstance`]
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver + '_>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         match result.parse_duration {
///             Some(parse) => println!("Part {}: {} (parse {}, solve {})", part, result.answer, parse, result.duration()),
///             None => println!("Part {}: {} (solve {})", part, result.answer, result.duration()),
///         }
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve `part`, timing it
    ///
    /// The first successful call also carries the parse time; a failed part
    /// leaves it for the next one.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// When parsing started (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// When parsing finished (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// How long parsing took, whether or not it was reported yet
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts this puzzle has
    fn parts(&self) -> u8;
}

impl<'a, S: Solver> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        let parse_duration = (!std::mem::replace(&mut self.parse_reported, true)).then(|| self.parse_duration());
        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
            parse_duration,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
