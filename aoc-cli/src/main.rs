//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-puzzles to link the solver plugins
use aoc_puzzles as _;

use aoc_solver::{SolverInfo, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::{ArcExecutorError, CliError, ExecutorError, RunError};
use executor::{Executor, SolverResult};
use output::OutputFormatter;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr at a level picked by `-v` count, unless `RUST_LOG` is set
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    debug!(?config, "resolved configuration");

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(ArcExecutorError::from)?;

    if config.list {
        let solvers: Vec<SolverInfo> = executor.matching_solvers().collect();
        if solvers.is_empty() {
            return Err(CliError::NoMatchingSolver);
        }
        OutputFormatter::new(config.quiet).print_list(&solvers);
        return Ok(());
    }

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        return Err(CliError::NoMatchingSolver);
    }

    let executor = match &config.input {
        Some(source) => {
            require_single_solver(work_items.len())?;
            executor.with_explicit_input(input::read_explicit(source)?)
        }
        None => executor,
    };

    run_executor(executor, work_items, config.quiet)
}

/// Run the executor and print results in (year, day, part) order
fn run_executor(
    executor: Executor,
    work_items: Vec<executor::WorkItem>,
    quiet: bool,
) -> Result<(), CliError> {
    info!(solvers = work_items.len(), "running solvers");

    // Build expected keys for result aggregation
    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| ArcExecutorError::from(ExecutorError::Panicked))??;

    formatter.print_summary(&results);
    outcome(&results)
}

/// `--input` overrides one puzzle's input, so it needs exactly one selected
fn require_single_solver(selected: usize) -> Result<(), CliError> {
    if selected == 1 {
        return Ok(());
    }
    Err(CliError::Config(format!(
        "--input needs exactly one selected solver, but {} match; narrow with --year/--day",
        selected
    )))
}

/// Overall result of a run; input failures take precedence over solve failures
fn outcome(results: &[SolverResult]) -> Result<(), CliError> {
    let total = results.len();
    let input_failures = results
        .iter()
        .filter(|r| matches!(r.answer, Err(RunError::Input(_))))
        .count();
    let failures = results.iter().filter(|r| r.answer.is_err()).count();
    info!(total, failures, "run finished");

    if input_failures > 0 {
        Err(CliError::InputsFailed {
            failed: input_failures,
            total,
        })
    } else if failures > 0 {
        Err(CliError::SolvesFailed {
            failed: failures,
            total,
        })
    } else {
        Ok(())
    }
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
