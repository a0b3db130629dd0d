//! aoc23 - Command-line interface for running Advent of Code solvers

mod cli;
mod error;
mod input;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use error::CliError;
use output::OutputFormatter;
use puzzle_solver::RegistryBuilder;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    if args.list {
        for info in registry.solver_info() {
            println!("{}/day{:02} ({} parts)", info.year, info.day, info.parts);
        }
        return Ok(());
    }

    let day = args.day.ok_or(CliError::MissingDay)?;
    let text = input::read_input(args.input.as_deref())?;
    let mut solver = registry.create_solver(args.year, day, &text)?;

    let parts: Vec<u8> = match args.part {
        Some(part) => vec![part],
        None => (1..=solver.parts()).collect(),
    };

    let formatter = OutputFormatter::new(args.quiet);
    for (i, &part) in parts.iter().enumerate() {
        let result = solver.solve(part)?;
        let parse = (i == 0).then(|| solver.parse_duration());
        formatter.print_part(part, &result, parse);
    }
    Ok(())
}
