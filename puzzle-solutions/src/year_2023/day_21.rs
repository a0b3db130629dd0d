//! Day 21: Step Counter
//!
//! Part 1 steps a frontier set across the garden. Part 2 steps it
//! across the infinitely tiled garden and extrapolates the quadratic
//! growth to 26,501,365 steps with finite differences.

use std::collections::HashSet;

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, Vec2};

pub struct Day21;

inventory::submit! {
    SolverPlugin { year: 2023, day: 21, solver: &Day21, tags: &["2023", "toroidal"] }
}

const PART_1_STEPS: usize = 64;
const PART_2_STEPS: usize = 26_501_365;

pub struct Garden {
    grid: Grid,
    start: Vec2,
}

impl AocParser for Day21 {
    type SharedData<'a> = Garden;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut grid =
            Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("no starting position (S)".to_string()))?;
        // The start tile is an ordinary garden plot.
        grid.set(start, b'.');
        Ok(Garden { grid, start })
    }
}

impl Solver for Day21 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(reachable_in(shared, PART_1_STEPS).to_string()),
            2 => extrapolate(shared, PART_2_STEPS).map(|plots| plots.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Plots reachable in exactly `steps` steps on the infinitely tiled
/// garden. Parity makes "at most" collapse to "exactly", so a plain
/// frontier set per step suffices.
fn reachable_in(garden: &Garden, steps: usize) -> usize {
    let mut frontier: HashSet<Vec2> = HashSet::from([garden.start]);
    for _ in 0..steps {
        let mut next = HashSet::with_capacity(frontier.len() * 2);
        for &pos in &frontier {
            for offset in Vec2::ORTHOGONAL {
                let candidate = pos + offset;
                if garden.grid.get_wrapped(candidate) == Some(b'.') {
                    next.insert(candidate);
                }
            }
        }
        frontier = next;
    }
    frontier.len()
}

/// The reachable count grows quadratically in full garden periods once
/// the frontier clears the first tile. Sample three aligned step counts
/// and extend the second difference.
fn extrapolate(garden: &Garden, steps: usize) -> Result<i64, SolveError> {
    let period = garden.grid.rows();
    if garden.grid.cols() != period {
        return Err(SolveError::SolveFailed(
            anyhow!("quadratic extrapolation needs a square garden").into(),
        ));
    }
    let half = period / 2;
    if steps < half || (steps - half) % period != 0 {
        return Err(SolveError::SolveFailed(
            anyhow!("garden period {period} does not align with {steps} steps").into(),
        ));
    }
    let n = ((steps - half) / period) as i64;

    let a0 = reachable_in(garden, half) as i64;
    let a1 = reachable_in(garden, half + period) as i64;
    let a2 = reachable_in(garden, half + 2 * period) as i64;
    let d1 = a1 - a0;
    let d2 = a2 - a1;
    Ok(a0 + d1 * n + n * (n - 1) / 2 * (d2 - d1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........";

    #[test]
    fn frontier_counts_on_the_tiled_garden() {
        let garden = Day21::parse(EXAMPLE).unwrap();
        assert_eq!(reachable_in(&garden, 6), 16);
        assert_eq!(reachable_in(&garden, 10), 50);
        assert_eq!(reachable_in(&garden, 50), 1594);
    }

    #[test]
    fn zero_steps_is_just_the_start() {
        let garden = Day21::parse(EXAMPLE).unwrap();
        assert_eq!(reachable_in(&garden, 0), 1);
    }

    #[test]
    fn extrapolation_matches_simulation_on_an_open_garden() {
        // An unobstructed garden grows as an exact diamond, (n+1)^2
        // plots after n steps, so the quadratic fit is exact.
        let garden = Day21::parse(".....\n.....\n..S..\n.....\n.....").unwrap();
        let steps = 2 + 3 * 5;
        assert_eq!(extrapolate(&garden, steps).unwrap(), 18 * 18);
        assert_eq!(reachable_in(&garden, steps), 18 * 18);
    }

    #[test]
    fn misaligned_step_counts_are_rejected() {
        let garden = Day21::parse(EXAMPLE).unwrap();
        assert!(extrapolate(&garden, 7).is_err());
    }

    #[test]
    fn missing_start_is_a_parse_error() {
        assert!(matches!(
            Day21::parse("...\n.#."),
            Err(ParseError::MissingData(_))
        ));
    }
}
