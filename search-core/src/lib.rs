//! Bounded state-space graph search
//!
//! The recurring non-trivial pattern across Advent of Code puzzles is a
//! search over an implicit graph of opaque states: flood fills and
//! shortest paths over character grids, weighted shortest paths with
//! auxiliary constraints folded into the state, and iterate-to-fixed-point
//! simulations resolved by cycle detection. This crate factors that
//! pattern out so each puzzle only supplies its domain-specific pieces.
//!
//! # Overview
//!
//! - [`search`] / [`distances`]: frontier search over any `Clone + Eq +
//!   Hash` state type, unweighted (FIFO) or weighted (min-priority queue
//!   with lazy deletion).
//! - [`run_to_step`]: applies a deterministic transform N times, using
//!   first-repeat detection to skip over the periodic tail.
//! - [`Grid`]: a rectangular byte grid parsed from puzzle text, with
//!   bounded and toroidal lookup and configurable neighbor rules.
//! - [`RedirectTable`]: a data-driven (cell symbol, incoming direction)
//!   transition table for beam/pipe redirection puzzles, plus a visited
//!   state tracer guaranteed to terminate on cyclic layouts.
//!
//! # Example
//!
//! ```
//! use search_core::{Grid, SearchMode, Vec2, search};
//!
//! let grid = Grid::parse("...\n.#.\n...").unwrap();
//! let goal = Vec2::new(2, 2);
//! let cost = search(
//!     [Vec2::new(0, 0)],
//!     |&pos| pos == goal,
//!     |&pos| {
//!         grid.neighbors4(pos, |cell| cell != b'#')
//!             .into_iter()
//!             .map(|next| (next, 1))
//!             .collect::<Vec<_>>()
//!     },
//!     SearchMode::Unweighted,
//! )
//! .unwrap();
//! assert_eq!(cost, 4);
//! ```
//!
//! All entities live for a single invocation: frontiers, visited tables
//! and cycle traces are created per call and dropped with the result.
//! Nothing here is concurrent; state spaces are finite and termination
//! comes from visited-state deduplication.

mod beam;
mod cycle;
mod error;
mod frontier;
mod grid;
mod vec2;

pub use beam::{Redirect, RedirectTable};
pub use cycle::{DEFAULT_STEP_BUDGET, run_to_step, run_to_step_bounded};
pub use error::{CycleError, GridError, SearchError};
pub use frontier::{SearchMode, distances, search};
pub use grid::Grid;
pub use vec2::Vec2;
