//! Advent of Code 2023
//!
//! The days built on the shared search engine: flood fills and loop
//! geometry (10), memoized counting (12), cycle detection (14), beam
//! tracing (16), constrained weighted search (17), pulse-network
//! simulation (20), toroidal stepping (21) and longest-path contraction
//! (23).

pub mod day_10;
pub mod day_12;
pub mod day_14;
pub mod day_16;
pub mod day_17;
pub mod day_20;
pub mod day_21;
pub mod day_23;
