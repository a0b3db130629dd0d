//! Advent of Code puzzle solutions with automatic registration
//!
//! Each solution implements the `puzzle-solver` traits over the
//! `search-core` engine and submits a `SolverPlugin` via
//! `inventory::submit!`, so linking this crate is enough to make every
//! day available to the registry.

pub mod year_2023;
