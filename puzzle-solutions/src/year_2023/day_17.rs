//! Day 17: Clumsy Crucible
//!
//! Weighted search over (position, heading, run length) states. The run
//! length encodes how far the crucible has gone straight, which gates
//! both turning and stopping.

use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, SearchError, SearchMode, Vec2, search};

pub struct Day17;

inventory::submit! {
    SolverPlugin { year: 2023, day: 17, solver: &Day17, tags: &["2023", "weighted-search"] }
}

impl AocParser for Day17 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid =
            Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let all_digits = grid
            .positions()
            .all(|pos| grid.get(pos).is_some_and(|cell| cell.is_ascii_digit()));
        if !all_digits {
            return Err(ParseError::InvalidFormat(
                "heat loss map must be all digits".to_string(),
            ));
        }
        Ok(grid)
    }
}

impl Solver for Day17 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let (min_run, max_run) = match part {
            1 => (1, 3),
            2 => (4, 10),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        min_heat_loss(shared, min_run, max_run)
            .map(|heat| heat.to_string())
            .map_err(SolveError::failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Crucible {
    pos: Vec2,
    dir: Vec2,
    run: u8,
}

/// Least total heat loss from the top-left to the bottom-right corner.
/// The crucible may go straight while `run < max_run`, may turn (or
/// stop) only once `run >= min_run`, and never reverses.
fn min_heat_loss(grid: &Grid, min_run: u8, max_run: u8) -> Result<i64, SearchError> {
    let goal = Vec2::new(grid.rows() as i32 - 1, grid.cols() as i32 - 1);
    let origin = Vec2::new(0, 0);

    search(
        [
            Crucible { pos: origin, dir: Vec2::EAST, run: 0 },
            Crucible { pos: origin, dir: Vec2::SOUTH, run: 0 },
        ],
        |state| state.pos == goal && state.run >= min_run,
        |state| {
            let mut candidates = Vec::with_capacity(3);
            if state.run < max_run {
                candidates.push((state.dir, state.run + 1));
            }
            if state.run >= min_run {
                candidates.push((state.dir.rotate_left(), 1));
                candidates.push((state.dir.rotate_right(), 1));
            }
            candidates
                .into_iter()
                .filter_map(|(dir, run)| {
                    let pos = state.pos + dir;
                    grid.get(pos)
                        .map(|cell| (Crucible { pos, dir, run }, i64::from(cell - b'0')))
                })
                .collect::<Vec<_>>()
        },
        SearchMode::Weighted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    const ULTRA_UNFORTUNATE: &str = "111111111111
999999999991
999999999991
999999999991
999999999991";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day17::parse(input).unwrap();
        Day17::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn part_1_normal_crucible() {
        assert_eq!(solve(EXAMPLE, 1), "102");
    }

    #[test]
    fn part_2_ultra_crucible() {
        assert_eq!(solve(EXAMPLE, 2), "94");
    }

    #[test]
    fn ultra_crucible_overshoots_short_corridors() {
        assert_eq!(solve(ULTRA_UNFORTUNATE, 2), "71");
    }

    #[test]
    fn ultra_crucible_cannot_stop_short() {
        // A 1x2 map: the goal is one step away but an ultra crucible
        // must travel at least four cells before stopping.
        let grid = Day17::parse("19").unwrap();
        assert!(matches!(
            min_heat_loss(&grid, 4, 10),
            Err(SearchError::NoPath)
        ));
        assert_eq!(min_heat_loss(&grid, 1, 3), Ok(9));
    }

    #[test]
    fn non_digit_maps_are_rejected() {
        assert!(matches!(
            Day17::parse("12\n3x"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
