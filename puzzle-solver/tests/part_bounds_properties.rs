//! Property-based tests for solver part bounds validation

use proptest::prelude::*;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked_solve(parts: u8, part: u8) -> Result<String, SolveError> {
    let mut shared = ();
    match parts {
        1 => TestSolver::<1>::solve_part_checked_range(&mut shared, part),
        2 => TestSolver::<2>::solve_part_checked_range(&mut shared, part),
        _ => TestSolver::<3>::solve_part_checked_range(&mut shared, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any solver with PARTS = N, part = 0 or part > N is rejected
    /// with `PartOutOfRange` and the part number is echoed back.
    #[test]
    fn out_of_range_parts_are_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let result = checked_solve(parts, part);
        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }
}
