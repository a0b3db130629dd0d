//! Day 16: The Floor Will Be Lava
//!
//! Beam tracing over the mirror/splitter redirect table; part 2 tries
//! every edge entry and keeps the best energized count.

use itertools::chain;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, RedirectTable, Vec2};

pub struct Day16;

inventory::submit! {
    SolverPlugin { year: 2023, day: 16, solver: &Day16, tags: &["2023", "beam-tracing"] }
}

pub struct Contraption {
    grid: Grid,
    optics: RedirectTable,
}

impl AocParser for Day16 {
    type SharedData<'a> = Contraption;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid =
            Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(Contraption {
            grid,
            optics: RedirectTable::mirrors(),
        })
    }
}

impl Solver for Day16 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(energized(shared, Vec2::new(0, -1), Vec2::EAST).to_string()),
            2 => {
                let rows = shared.grid.rows() as i32;
                let cols = shared.grid.cols() as i32;
                let from_sides = (0..rows).flat_map(|r| {
                    [
                        (Vec2::new(r, -1), Vec2::EAST),
                        (Vec2::new(r, cols), Vec2::WEST),
                    ]
                });
                let from_caps = (0..cols).flat_map(|c| {
                    [
                        (Vec2::new(-1, c), Vec2::SOUTH),
                        (Vec2::new(rows, c), Vec2::NORTH),
                    ]
                });
                let best = chain(from_sides, from_caps)
                    .map(|(entry, dir)| energized(shared, entry, dir))
                    .max()
                    .unwrap_or(0);
                Ok(best.to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn energized(contraption: &Contraption, entry: Vec2, dir: Vec2) -> usize {
    contraption.optics.trace(&contraption.grid, entry, dir).len()
}
