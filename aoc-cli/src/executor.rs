//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError, RunError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverInfo, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, RunError>,
    /// Set on the result of the part that paid for parsing
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub embedded_input: Option<&'static str>,
}

/// Parallel executor for running solvers
pub struct Executor {
    context: ExecutionContext,
    thread_pool: rayon::ThreadPool,
}

/// State the worker threads read while running work items
struct ExecutionContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            context: ExecutionContext {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Feed `input` to every work item instead of reading the input directory
    pub fn with_explicit_input(mut self, input: String) -> Self {
        self.context.inputs = self.context.inputs.with_explicit(input);
        self
    }

    /// Registered solvers passing the year and day filters, in (year, day) order
    pub fn matching_solvers(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        let cfg = &self.context;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.matching_solvers()
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
                embedded_input: info.embedded_input,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.context.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let context = &self.context;

        match context.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work_item(work, &tx, context) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part mode fans out again inside each work item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                self.execute_parallel_grouped(work_items.into_iter().map(|w| vec![w]).collect(), &tx)
            }
        }
    }

    /// Run groups in parallel and the items of each group in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let context = &self.context;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in &items {
                        if let Err(e) = run_work_item(work, tx, context) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .flatten()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}

fn error_result(year: u16, day: u8, part: u8, error: RunError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Load the input for one work item and solve its parts.
///
/// Input, parse and solve failures become error results; only failures of
/// the executor itself are returned.
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    context: &ExecutionContext,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    debug!(year, day, parts = ?work.parts, "running work item");

    let input = match context.inputs.load(year, day, work.embedded_input) {
        Ok(input) => input,
        Err(e) => {
            let error = RunError::from(e);
            for part in work.parts.clone() {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    if matches!(context.parallelize_by, ParallelizeBy::Part) {
        // each part parses its own instance
        work.parts.clone().into_par_iter().try_for_each(|part| {
            run_parts(year, day, part..=part, &input, tx, &context.registry)
        })
    } else {
        run_parts(year, day, work.parts.clone(), &input, tx, &context.registry)
    }
}

/// Parse `input` once and solve `parts` against the shared instance
fn run_parts(
    year: u16,
    day: u8,
    parts: RangeInclusive<u8>,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error = RunError::from(e);
            for part in parts {
                send(tx, error_result(year, day, part, error.clone()))?;
            }
            return Ok(());
        }
    };

    for part in parts {
        send(tx, solve_part(year, day, part, &mut *solver))?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            parse_duration: solved.parse_duration,
            answer: Ok(solved.answer),
        },
        Err(e) => error_result(year, day, part, aoc_solver::SolverError::from(e).into()),
    }
}
