//! Day 23: A Long Walk
//!
//! Longest path through the trail maze. Corridors are contracted into
//! weighted edges between junctions first, then an exhaustive DFS with
//! a visited bitmask finds the longest junction-to-junction route.

use std::collections::HashMap;

use anyhow::anyhow;
use puzzle_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
use search_core::{Grid, Vec2};

pub struct Day23;

inventory::submit! {
    SolverPlugin { year: 2023, day: 23, solver: &Day23, tags: &["2023", "longest-path"] }
}

pub struct Trails {
    grid: Grid,
    start: Vec2,
    end: Vec2,
}

impl AocParser for Day23 {
    type SharedData<'a> = Trails;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid =
            Grid::parse(input.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let cols = grid.cols() as i32;
        let last_row = grid.rows() as i32 - 1;
        let start = (0..cols)
            .map(|c| Vec2::new(0, c))
            .find(|&pos| grid.get(pos) == Some(b'.'))
            .ok_or_else(|| ParseError::MissingData("no open tile in the top row".to_string()))?;
        let end = (0..cols)
            .map(|c| Vec2::new(last_row, c))
            .find(|&pos| grid.get(pos) == Some(b'.'))
            .ok_or_else(|| {
                ParseError::MissingData("no open tile in the bottom row".to_string())
            })?;
        Ok(Trails { grid, start, end })
    }
}

impl Solver for Day23 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let respect_slopes = match part {
            1 => true,
            2 => false,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let graph = contract(shared, respect_slopes)?;
        let hike = longest(&graph.edges, graph.start, graph.end, 1 << graph.start)
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no route to the exit").into()))?;
        Ok(hike.to_string())
    }
}

fn slope_exit(cell: u8) -> Option<Vec2> {
    match cell {
        b'^' => Some(Vec2::NORTH),
        b'v' => Some(Vec2::SOUTH),
        b'<' => Some(Vec2::WEST),
        b'>' => Some(Vec2::EAST),
        _ => None,
    }
}

/// Legal single steps from `pos`. A slope tile forces its direction
/// when slopes are respected; walls always block.
fn moves(grid: &Grid, pos: Vec2, respect_slopes: bool) -> Vec<Vec2> {
    grid.neighbors_where(pos, &Vec2::ORTHOGONAL, |offset, from, to| {
        to != b'#' && (!respect_slopes || slope_exit(from).is_none_or(|dir| dir == offset))
    })
}

struct TrailGraph {
    edges: Vec<Vec<(usize, i64)>>,
    start: usize,
    end: usize,
}

/// Collapses corridors into weighted edges between junctions. A
/// junction is any open tile without exactly two open neighbors; the
/// start and end tiles count as junctions too.
fn contract(trails: &Trails, respect_slopes: bool) -> Result<TrailGraph, SolveError> {
    let grid = &trails.grid;

    let mut index: HashMap<Vec2, usize> = HashMap::new();
    let mut nodes: Vec<Vec2> = Vec::new();
    for pos in grid.positions() {
        if grid.get(pos) == Some(b'#') {
            continue;
        }
        let degree = moves(grid, pos, false).len();
        if degree != 2 || pos == trails.start || pos == trails.end {
            index.insert(pos, nodes.len());
            nodes.push(pos);
        }
    }
    if nodes.len() > 64 {
        return Err(SolveError::SolveFailed(
            anyhow!("too many junctions for a 64-bit visited mask: {}", nodes.len()).into(),
        ));
    }

    let mut edges = vec![Vec::new(); nodes.len()];
    for (node_index, &node) in nodes.iter().enumerate() {
        for first in moves(grid, node, respect_slopes) {
            if let Some((dest, dist)) = follow_corridor(grid, &index, node, first, respect_slopes)
                && dest != node
            {
                edges[node_index].push((index[&dest], dist));
            }
        }
    }

    Ok(TrailGraph {
        edges,
        start: index[&trails.start],
        end: index[&trails.end],
    })
}

/// Walks a corridor from `cur` (one step out of a junction) until it
/// reaches the next junction. Returns `None` when a slope blocks the
/// way through.
fn follow_corridor(
    grid: &Grid,
    index: &HashMap<Vec2, usize>,
    mut prev: Vec2,
    mut cur: Vec2,
    respect_slopes: bool,
) -> Option<(Vec2, i64)> {
    let mut dist = 1;
    while !index.contains_key(&cur) {
        let next = moves(grid, cur, respect_slopes)
            .into_iter()
            .find(|&n| n != prev)?;
        prev = cur;
        cur = next;
        dist += 1;
    }
    Some((cur, dist))
}

/// Longest path from `node` to `end` over unvisited junctions, or
/// `None` when the end is unreachable.
fn longest(edges: &[Vec<(usize, i64)>], node: usize, end: usize, visited: u64) -> Option<i64> {
    if node == end {
        return Some(0);
    }
    let mut best = None;
    for &(next, dist) in &edges[node] {
        if visited & (1 << next) != 0 {
            continue;
        }
        if let Some(tail) = longest(edges, next, end, visited | (1 << next)) {
            let total = dist + tail;
            best = Some(best.map_or(total, |b: i64| b.max(total)));
        }
    }
    best
}
