//! CLI error type

use puzzle_solver::{RegistrationError, SolveError, SolverError};
use thiserror::Error;

/// Errors surfaced to the user with a non-zero exit code
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the puzzle input failed
    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },
    /// A day must be selected to run a solver
    #[error("--day is required unless --list is given")]
    MissingDay,
    /// Plugin registration failed
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    /// Solver lookup or parsing failed
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// Solving a part failed
    #[error(transparent)]
    Solve(#[from] SolveError),
}
