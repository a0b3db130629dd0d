//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::HashMap;

/// Factory function type for creating solver instances
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
}

struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration detects year-day duplicates; the built registry is
/// immutable and only supports lookup and solver creation.
///
/// # Example
///
/// ```no_run
/// # use puzzle_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: HashMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: HashMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// Returns an error if a solver is already registered for the given
    /// year-day combination.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through every plugin submitted via `inventory::submit!`
    /// and registers each one with the builder.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`,
    /// allowing selective registration based on tags, year or day.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"search"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// Maps (year, day) pairs to factory functions that create solver
/// instances from raw input.
pub struct SolverRegistry {
    solvers: HashMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully parsed and created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Check whether a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Metadata for all registered solvers, sorted by year then day
    pub fn solver_info(&self) -> Vec<SolverInfo> {
        let mut info: Vec<SolverInfo> = self
            .solvers
            .iter()
            .map(|(&(year, day), entry)| SolverInfo {
                year,
                day,
                parts: entry.parts,
            })
            .collect();
        info.sort_by_key(|i| (i.year, i.day));
        info
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Type-erased interface with no associated types, so different solver
/// types can sit behind the same `&'static dyn` reference in a plugin.
/// Blanket-implemented for every [`Solver`].
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance) as Box<dyn DynSolver + '_>)
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Solutions submit one of these via `inventory::submit!`; the CLI picks
/// them all up at registry build time.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 14,
///         solver: &Day14,
///         tags: &["2023", "cycle-detection"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "2023", "search", "cycle-detection")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData<'a> = i64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidFormat("expected integer".to_string()))
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok((*shared * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn register_create_and_solve() {
        let builder = Doubler
            .register_with(RegistryBuilder::new(), 2023, 1)
            .unwrap();
        let registry = builder.build();
        assert!(registry.contains(2023, 1));

        let mut solver = registry.create_solver(2023, 1, "21").unwrap();
        assert_eq!(solver.parts(), 1);
        assert_eq!(solver.solve(1).unwrap().answer, "42");
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let builder = Doubler
            .register_with(RegistryBuilder::new(), 2023, 1)
            .unwrap();
        let result = Doubler.register_with(builder, 2023, 1);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2023, 1))
        ));
    }

    #[test]
    fn missing_solver_is_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create_solver(2023, 5, ""),
            Err(SolverError::NotFound(2023, 5))
        ));
    }

    #[test]
    fn parse_failure_surfaces_as_parse_error() {
        let registry = Doubler
            .register_with(RegistryBuilder::new(), 2023, 1)
            .unwrap()
            .build();
        assert!(matches!(
            registry.create_solver(2023, 1, "not a number"),
            Err(SolverError::ParseError(_))
        ));
    }

    #[test]
    fn solver_info_is_sorted() {
        let registry = Doubler
            .register_with(RegistryBuilder::new(), 2023, 9)
            .unwrap()
            .register(2023, 2, 2, |_| {
                Err(ParseError::Other("unused".to_string()))
            })
            .unwrap()
            .build();
        let info = registry.solver_info();
        assert_eq!(info.len(), 2);
        assert_eq!((info[0].year, info[0].day), (2023, 2));
        assert_eq!((info[1].year, info[1].day), (2023, 9));
    }
}
