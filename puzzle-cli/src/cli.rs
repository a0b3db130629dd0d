//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2023 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc23", about = "Run Advent of Code 2023 solvers", version)]
pub struct Args {
    /// Year to run
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Day to run
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// List registered solvers and exit
    #[arg(short, long)]
    pub list: bool,

    /// Puzzle input file (reads stdin when omitted)
    pub input: Option<PathBuf>,
}
