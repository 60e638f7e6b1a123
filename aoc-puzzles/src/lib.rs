//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organized by year. Each one derives `AutoRegisterSolver`,
//! so linking this crate is enough for `register_all_plugins` to find it.
//! The `utils` module holds the parsing and hashing helpers the puzzles
//! share.

pub mod utils;

#[cfg(feature = "year_2015")]
pub mod year_2015;

#[cfg(feature = "year_2022")]
pub mod year_2022;
