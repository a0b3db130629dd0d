//! Day 12: Hot Springs
//!
//! Counts the ways to place damage groups into a wildcard record with a
//! memoized recursion over (record offset, group offset).

use std::collections::HashMap;
use std::iter;

use anyhow::anyhow;
use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};

pub struct Day12;

inventory::submit! {
    SolverPlugin { year: 2023, day: 12, solver: &Day12, tags: &["2023", "memoization"] }
}

#[derive(Debug, Clone)]
pub struct SpringRow {
    record: String,
    groups: Vec<usize>,
}

impl AocParser for Day12 {
    type SharedData<'a> = Vec<SpringRow>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                parse_row(line).map_err(|e| ParseError::InvalidFormat(format!("line {}: {e}", i + 1)))
            })
            .collect()
    }
}

fn parse_row(line: &str) -> anyhow::Result<SpringRow> {
    let (record, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<record> <groups>'"))?;
    let groups = groups
        .split(',')
        .map(|n| n.parse::<usize>().map_err(|_| anyhow!("bad group size {n:?}")))
        .collect::<anyhow::Result<_>>()?;
    Ok(SpringRow {
        record: record.to_string(),
        groups,
    })
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .iter()
                .map(|row| arrangements(row.record.as_bytes(), &row.groups))
                .sum::<u64>()
                .to_string()),
            2 => Ok(shared
                .iter()
                .map(|row| {
                    let unfolded = unfold(row);
                    arrangements(unfolded.record.as_bytes(), &unfolded.groups)
                })
                .sum::<u64>()
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Five copies of the record joined by '?', five copies of the groups.
fn unfold(row: &SpringRow) -> SpringRow {
    SpringRow {
        record: iter::repeat(row.record.as_str()).take(5).join("?"),
        groups: row.groups.repeat(5),
    }
}

/// Number of assignments of '?' tiles consistent with the group sizes.
fn arrangements(record: &[u8], groups: &[usize]) -> u64 {
    count(record, groups, 0, 0, &mut HashMap::new())
}

/// Ways to place `groups[group..]` into `record[offset..]`. Each
/// placement commits a run of leading dots, one group of '#' and a
/// single separating dot, then recurses on the rest.
fn count(
    record: &[u8],
    groups: &[usize],
    offset: usize,
    group: usize,
    memo: &mut HashMap<(usize, usize), u64>,
) -> u64 {
    if group == groups.len() {
        return u64::from(!record[offset..].contains(&b'#'));
    }
    if let Some(&cached) = memo.get(&(offset, group)) {
        return cached;
    }

    let len = record.len() - offset;
    let needed: usize = groups[group..].iter().sum();
    let remaining_groups = groups.len() - group;
    // Largest leading gap that still leaves room for every group ahead.
    let slack = (len + remaining_groups).saturating_sub(needed);

    let mut ways = 0;
    'placement: for gap in 0..slack {
        let width = gap + groups[group] + 1;
        for k in 0..width.min(len) {
            let want = if k < gap || k == gap + groups[group] {
                b'.'
            } else {
                b'#'
            };
            let have = record[offset + k];
            if have != want && have != b'?' {
                continue 'placement;
            }
        }
        let next = (offset + width).min(record.len());
        ways += count(record, groups, next, group + 1, memo);
    }

    memo.insert((offset, group), ways);
    ways
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

    fn solve(input: &str, part: u8) -> String {
        let mut shared = Day12::parse(input).unwrap();
        Day12::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn part_1_example_rows() {
        assert_eq!(solve(EXAMPLE, 1), "21");
    }

    #[test]
    fn part_2_unfolded_rows() {
        assert_eq!(solve(EXAMPLE, 2), "525152");
    }

    #[test]
    fn single_row_counts() {
        assert_eq!(arrangements(b"???.###", &[1, 1, 3]), 1);
        assert_eq!(arrangements(b".??..??...?##.", &[1, 1, 3]), 4);
        assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
    }

    #[test]
    fn no_groups_means_no_damage_allowed() {
        assert_eq!(arrangements(b"...", &[]), 1);
        assert_eq!(arrangements(b".#.", &[]), 0);
        assert_eq!(arrangements(b"???", &[]), 1);
    }

    #[test]
    fn groups_that_cannot_fit() {
        assert_eq!(arrangements(b"..", &[3]), 0);
        assert_eq!(arrangements(b"#.#", &[3]), 0);
    }

    #[test]
    fn unfold_joins_with_wildcards() {
        let row = parse_row(".# 1").unwrap();
        let unfolded = unfold(&row);
        assert_eq!(unfolded.record, ".#?.#?.#?.#?.#");
        assert_eq!(unfolded.groups, vec![1; 5]);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(matches!(
            Day12::parse("???.###"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Day12::parse("???.### 1,x,3"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
