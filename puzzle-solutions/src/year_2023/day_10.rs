//! Day 10: Pipe Maze
//!
//! Part 1 flood-fills the pipe loop from the start to find the farthest
//! tile. Part 2 walks the loop in order and counts interior tiles with
//! the shoelace formula and Pick's theorem.

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, SearchMode, Vec2, distances};

pub struct Day10;

inventory::submit! {
    SolverPlugin { year: 2023, day: 10, solver: &Day10, tags: &["2023", "flood-fill", "geometry"] }
}

pub struct Maze {
    grid: Grid,
    start: Vec2,
}

impl AocParser for Day10 {
    type SharedData<'a> = Maze;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid =
            Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no starting position (S)".to_string()))?;
        Ok(Maze { grid, start })
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let dist = distances(
                    [shared.start],
                    |&pos| {
                        connected(shared, pos)
                            .into_iter()
                            .map(|next| (next, 1))
                            .collect::<Vec<_>>()
                    },
                    SearchMode::Unweighted,
                )
                .map_err(SolveError::failed)?;
                Ok(dist.values().copied().max().unwrap_or(0).to_string())
            }
            2 => {
                let polygon = loop_polygon(shared)?;
                Ok(interior_tiles(&polygon).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Directions a pipe tile opens toward. The start tile opens everywhere;
/// its real shape is whatever its neighbors agree to.
fn exits(cell: u8) -> &'static [Vec2] {
    match cell {
        b'|' => &[Vec2::NORTH, Vec2::SOUTH],
        b'-' => &[Vec2::WEST, Vec2::EAST],
        b'J' => &[Vec2::NORTH, Vec2::WEST],
        b'L' => &[Vec2::NORTH, Vec2::EAST],
        b'7' => &[Vec2::SOUTH, Vec2::WEST],
        b'F' => &[Vec2::SOUTH, Vec2::EAST],
        b'S' => &Vec2::ORTHOGONAL,
        _ => &[],
    }
}

/// Neighbors joined to `pos` by a pipe segment open on both ends.
fn connected(maze: &Maze, pos: Vec2) -> Vec<Vec2> {
    let Some(cell) = maze.grid.get(pos) else {
        return Vec::new();
    };
    maze.grid
        .neighbors_where(pos, exits(cell), |offset, _, to| {
            exits(to).contains(&-offset)
        })
}

/// Loop vertices in walk order, starting from `S`.
fn loop_polygon(maze: &Maze) -> Result<Vec<Vec2>, SolveError> {
    let first = connected(maze, maze.start)
        .into_iter()
        .next()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("start has no connecting pipes").into()))?;

    let mut polygon = vec![maze.start];
    let mut prev = maze.start;
    let mut cur = first;
    while cur != maze.start {
        polygon.push(cur);
        let next = connected(maze, cur)
            .into_iter()
            .find(|&n| n != prev)
            .ok_or_else(|| {
                SolveError::SolveFailed(
                    anyhow!("pipe at ({}, {}) is a dead end", cur.row, cur.col).into(),
                )
            })?;
        prev = cur;
        cur = next;
    }
    Ok(polygon)
}

/// Tiles strictly inside the loop: shoelace for twice the area, then
/// Pick's theorem (`A = I + B/2 - 1`) solved for `I`.
fn interior_tiles(polygon: &[Vec2]) -> i64 {
    let twice_area: i64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .take(polygon.len())
        .map(|(a, b)| a.col as i64 * b.row as i64 - b.col as i64 * a.row as i64)
        .sum();
    let boundary = polygon.len() as i64;
    (twice_area.abs() - boundary + 2) / 2
}
