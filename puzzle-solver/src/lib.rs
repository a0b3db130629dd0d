//! Advent of Code Solver Framework
//!
//! A type-safe framework for running Advent of Code solvers across years
//! and days. Each problem implements a parser and a solver over shared
//! data; a registry hands out type-erased, timed solver instances.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based parsing and solving ([`AocParser`], [`Solver`])
//! - Type erasure with parse/solve timing ([`DynSolver`], [`SolveResult`])
//! - A registry with duplicate detection ([`RegistryBuilder`], [`SolverRegistry`])
//! - Plugin auto-registration via `inventory` ([`SolverPlugin`])
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{AocParser, ParseError, RegistryBuilder, RegisterableSolver, SolveError, Solver};
//!
//! struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i32>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = MyDay1
//!     .register_with(RegistryBuilder::new(), 2023, 1)
//!     .unwrap()
//!     .build();
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugin registration
//!
//! Solution crates submit plugins at link time:
//!
//! ```ignore
//! inventory::submit! {
//!     SolverPlugin { year: 2023, day: 17, solver: &Day17, tags: &["2023", "search"] }
//! }
//! ```
//!
//! and the CLI builds its registry with
//! [`RegistryBuilder::register_all_plugins`], optionally filtered by tag.

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory so solution crates can submit plugins through us
pub use inventory;
