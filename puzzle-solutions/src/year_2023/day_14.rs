//! Day 14: Parabolic Reflector Dish
//!
//! Part 1 tilts the platform north once. Part 2 runs a billion spin
//! cycles through the fixed-point cycle detector instead of simulating
//! them all.

use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, Vec2, run_to_step};

pub struct Day14;

inventory::submit! {
    SolverPlugin { year: 2023, day: 14, solver: &Day14, tags: &["2023", "cycle-detection"] }
}

impl AocParser for Day14 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day14 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let mut platform = shared.clone();
                tilt(&mut platform, Vec2::NORTH);
                Ok(north_load(&platform).to_string())
            }
            2 => {
                let settled = run_to_step(shared.clone(), spin_cycle, 1_000_000_000)
                    .map_err(SolveError::failed)?;
                Ok(north_load(&settled).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn spin_cycle(platform: &Grid) -> Grid {
    let mut next = platform.clone();
    for dir in [Vec2::NORTH, Vec2::WEST, Vec2::SOUTH, Vec2::EAST] {
        tilt(&mut next, dir);
    }
    next
}

/// Roll every rounded rock as far toward `dir` as it goes. Each lane is
/// swept from the wall inward, tracking the next free slot; cube rocks
/// reset the slot past themselves.
fn tilt(platform: &mut Grid, dir: Vec2) {
    let scan = -dir;
    for lane_start in wall_cells(platform, dir) {
        let mut slot = lane_start;
        let mut pos = lane_start;
        while platform.in_bounds(pos) {
            match platform.get(pos) {
                Some(b'#') => slot = pos + scan,
                Some(b'O') => {
                    platform.set(pos, b'.');
                    platform.set(slot, b'O');
                    slot = slot + scan;
                }
                _ => {}
            }
            pos = pos + scan;
        }
    }
}

/// The cells along the wall the rocks roll against, one per lane.
fn wall_cells(platform: &Grid, dir: Vec2) -> Vec<Vec2> {
    let last_row = platform.rows() as i32 - 1;
    let last_col = platform.cols() as i32 - 1;
    if dir.col == 0 {
        let row = if dir == Vec2::NORTH { 0 } else { last_row };
        (0..=last_col).map(|c| Vec2::new(row, c)).collect()
    } else {
        let col = if dir == Vec2::WEST { 0 } else { last_col };
        (0..=last_row).map(|r| Vec2::new(r, col)).collect()
    }
}

/// Total load on the north support beams.
fn north_load(platform: &Grid) -> i64 {
    let rows = platform.rows() as i64;
    platform
        .positions()
        .filter(|&pos| platform.get(pos) == Some(b'O'))
        .map(|pos| rows - pos.row as i64)
        .sum()
}
