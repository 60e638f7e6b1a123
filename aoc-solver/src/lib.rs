//! Advent of Code Solver Library
//!
//! Traits and a registry for Advent of Code puzzle solutions. Each puzzle
//! parses its input once into shared data, then answers its parts against
//! that data.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into the puzzle's `SharedData`
//! - [`PartSolver<N>`] answers part `N`
//! - [`Solver`] ties the parts together (derive it with `#[derive(AocSolver)]`)
//! - [`SolverRegistry`] maps (year, day) to factories producing [`DynSolver`]s
//! - `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so the
//!   registry can discover solvers linked into the binary
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .trim()
//!             .chars()
//!             .map(|c| match c {
//!                 '(' => Ok(1),
//!                 ')' => Ok(-1),
//!                 other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other))),
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Floors>(2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "(()))").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "-1");
//! assert_eq!(solver.solve(2).unwrap().answer, "5");
//! ```
//!
//! # Part Dependencies
//!
//! Parts share `&mut SharedData`, so a part can cache work for a later part
//! (`Option` fields filled with `get_or_insert_with` are the usual shape).
//! Every part must still produce its answer when run on a fresh instance,
//! because callers may solve parts on separate instances.

// Lets the derive macros' `::aoc_solver` paths resolve inside this crate
extern crate self as aoc_solver;

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS, RegisterableSolver, SolverFactory, SolverInfo,
    SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
