//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Thread-safe factory that parses input into a boxed solver instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags attached at registration (empty for manual registration)
    pub tags: &'static [&'static str],
    /// Puzzle input compiled into the solver, if the puzzle ships one
    pub embedded_input: Option<&'static str>,
}

struct SolverEntry {
    info: SolverInfo,
    factory: SolverFactory,
}

/// Parse `input` into a boxed [`SolverInstance`] of `S`
fn instantiate<'a, S>(year: u16, day: u8, input: &'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
where
    S: Solver + 'static,
{
    Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration rejects duplicates and year/day pairs outside the
/// supported range. Once built, the registry is immutable.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(2015, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2015, 1, " hello ").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hello");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory function with an explicit parts count
    pub fn register<F>(self, year: u16, day: u8, parts: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let info = SolverInfo {
            year,
            day,
            parts,
            tags: &[],
            embedded_input: None,
        };
        self.insert(info, factory)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            instantiate::<S>(year, day, input)
        })
    }

    /// Register all collected solver plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// // Only 2015 solvers tagged "string"
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2015 && plugin.tags.contains(&"string"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin> {
            if filter(plugin) {
                self = self.register_plugin(plugin)?;
            }
        }
        Ok(self)
    }

    fn register_plugin(self, plugin: &'static SolverPlugin) -> Result<Self, RegistrationError> {
        let (year, day, solver) = (plugin.year, plugin.day, plugin.solver);
        let info = SolverInfo {
            year,
            day,
            parts: solver.parts(),
            tags: plugin.tags,
            embedded_input: plugin.input,
        };
        self.insert(info, move |input: &str| solver.instantiate(year, day, input))
    }

    fn insert<F>(mut self, info: SolverInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(info.year, info.day)
            .ok_or(RegistrationError::InvalidYearDay(info.year, info.day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(info.year, info.day));
        }

        self.entries[index] = Some(SolverEntry {
            info,
            factory: Box::new(factory),
        });
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Backed by a flat `Vec` indexed by year/day, so iteration is in
/// ascending (year, day) order.
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed input
    /// * `Err(SolverError)` - Out of range, not registered, or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.entry(year, day)?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Get metadata for a specific solver
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.entry(year, day).ok().map(|e| e.info)
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.info(year, day).is_some()
    }

    /// Iterate over metadata for all registered solvers in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.entries.iter().flatten().map(|e| e.info)
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    fn entry(&self, year: u16, day: u8) -> Result<&SolverEntry, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;
        self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))
    }
}

/// Object-safe handle over a [`Solver`] type, used by the plugin system
///
/// Every `Solver + Sync + 'static` type implements this through a blanket
/// impl, so a unit struct can be stored as `&'static dyn RegisterableSolver`.
pub trait RegisterableSolver: Sync {
    /// Number of parts the solver supports
    fn parts(&self) -> u8;

    /// Parse `input` into a boxed solver instance
    fn instantiate<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, ParseError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn instantiate<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, ParseError> {
        instantiate::<S>(year, day, input)
    }
}

/// Plugin information for automatic solver registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`; can also be
/// submitted by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day10;
///
/// impl AocParser for Day10 {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Day10 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2015,
///         day: 10,
///         solver: &Day10,
///         tags: &["string"],
///         input: Some("1321131112"),
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g., "grid", "graph", "2015")
    pub tags: &'static [&'static str],
    /// Embedded puzzle input for puzzles whose input is a short literal
    pub input: Option<&'static str>,
}

inventory::collect!(SolverPlugin);
