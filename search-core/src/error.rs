//! Error types for the search engine

use thiserror::Error;

/// Error type for frontier searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied without reaching a goal state
    #[error("no path to a goal state")]
    NoPath,
    /// A transition yielded a negative edge cost in weighted mode
    #[error("transition yielded negative edge cost {0}")]
    NegativeCost(i64),
}

/// Error type for the fixed-point cycle detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CycleError {
    /// The iteration budget ran out before a repeat or the target step
    #[error("no cycle detected within {0} transform applications")]
    BudgetExhausted(usize),
}

/// Error type for grid parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's
    #[error("inconsistent row length at row {row}: expected {expected}, found {found}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row contains a non-ASCII character
    #[error("non-ASCII character in row {0}")]
    NonAscii(usize),
}
