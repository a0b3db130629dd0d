//! Frontier search engine
//!
//! Generic traversal over an implicit state graph. States are opaque
//! `Clone + Eq + Hash` values; transitions are enumerated by a caller
//! closure yielding `(state, cost)` pairs. Auxiliary move constraints
//! (direction, run length, ...) belong inside the state value itself,
//! never in external mutable counters.

use crate::error::SearchError;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Frontier discipline for [`search`] and [`distances`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// FIFO frontier; costs are edge counts and transition costs are
    /// ignored. First visit is the shortest path in edges.
    Unweighted,
    /// Min-priority frontier keyed by accumulated cost. Requires
    /// non-negative edge costs; a state is final the first time it is
    /// popped.
    Weighted,
}

/// Heap entry for the weighted frontier. Ordered by accumulated cost,
/// ties broken by insertion sequence.
struct Entry<S> {
    cost: i64,
    seq: u64,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost).then(self.seq.cmp(&other.seq))
    }
}

/// Search from `starts` until `is_goal` holds, returning the cost of the
/// first goal state reached.
///
/// In [`SearchMode::Unweighted`] the result is the edge count of the
/// shortest path; in [`SearchMode::Weighted`] it is the minimal
/// accumulated cost, exact because costs are non-negative and states are
/// finalized on pop (stale frontier entries are skipped lazily).
///
/// # Errors
///
/// * [`SearchError::NoPath`] if the frontier empties with no goal reached.
/// * [`SearchError::NegativeCost`] if a transition yields a negative cost
///   in weighted mode.
pub fn search<S, I>(
    starts: impl IntoIterator<Item = S>,
    is_goal: impl FnMut(&S) -> bool,
    transitions: impl FnMut(&S) -> I,
    mode: SearchMode,
) -> Result<i64, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, i64)>,
{
    match mode {
        SearchMode::Unweighted => bfs(starts, is_goal, transitions),
        SearchMode::Weighted => dijkstra(starts, is_goal, transitions),
    }
}

/// Explore the whole reachable state space and return the best-cost table.
///
/// Every reachable state maps to its minimal cost from the nearest start
/// state. An empty start set yields an empty table; there is no "no path"
/// condition here.
///
/// # Errors
///
/// [`SearchError::NegativeCost`] if a transition yields a negative cost in
/// weighted mode.
pub fn distances<S, I>(
    starts: impl IntoIterator<Item = S>,
    mut transitions: impl FnMut(&S) -> I,
    mode: SearchMode,
) -> Result<HashMap<S, i64>, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, i64)>,
{
    match mode {
        SearchMode::Unweighted => {
            let mut dist = HashMap::new();
            let mut queue: VecDeque<(S, i64)> = starts.into_iter().map(|s| (s, 0)).collect();
            while let Some((state, steps)) = queue.pop_front() {
                if dist.contains_key(&state) {
                    continue;
                }
                for (next, _) in transitions(&state) {
                    if !dist.contains_key(&next) {
                        queue.push_back((next, steps + 1));
                    }
                }
                dist.insert(state, steps);
            }
            Ok(dist)
        }
        SearchMode::Weighted => {
            // Full Dijkstra; with an always-false goal the best-cost map
            // is settled once the heap drains.
            let mut best = HashMap::new();
            match dijkstra_with(starts, |_| false, &mut transitions, &mut best) {
                Err(SearchError::NoPath) => Ok(best),
                Err(e) => Err(e),
                Ok(_) => unreachable!("goal predicate is always false"),
            }
        }
    }
}

fn bfs<S, I>(
    starts: impl IntoIterator<Item = S>,
    mut is_goal: impl FnMut(&S) -> bool,
    mut transitions: impl FnMut(&S) -> I,
) -> Result<i64, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, i64)>,
{
    let mut visited = HashSet::new();
    let mut queue: VecDeque<(S, i64)> = starts.into_iter().map(|s| (s, 0)).collect();

    while let Some((state, steps)) = queue.pop_front() {
        // Visited the moment it is dequeued.
        if !visited.insert(state.clone()) {
            continue;
        }
        if is_goal(&state) {
            return Ok(steps);
        }
        for (next, _) in transitions(&state) {
            if !visited.contains(&next) {
                queue.push_back((next, steps + 1));
            }
        }
    }
    Err(SearchError::NoPath)
}

fn dijkstra<S, I>(
    starts: impl IntoIterator<Item = S>,
    is_goal: impl FnMut(&S) -> bool,
    mut transitions: impl FnMut(&S) -> I,
) -> Result<i64, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, i64)>,
{
    let mut best = HashMap::new();
    dijkstra_with(starts, is_goal, &mut transitions, &mut best)
}

fn dijkstra_with<S, I>(
    starts: impl IntoIterator<Item = S>,
    mut is_goal: impl FnMut(&S) -> bool,
    transitions: &mut impl FnMut(&S) -> I,
    best: &mut HashMap<S, i64>,
) -> Result<i64, SearchError>
where
    S: Clone + Eq + Hash,
    I: IntoIterator<Item = (S, i64)>,
{
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for state in starts {
        best.insert(state.clone(), 0);
        heap.push(Reverse(Entry {
            cost: 0,
            seq,
            state,
        }));
        seq += 1;
    }

    while let Some(Reverse(Entry { cost, state, .. })) = heap.pop() {
        // Lazy deletion: a cheaper entry for this state was already popped.
        if best.get(&state).is_some_and(|&b| cost > b) {
            continue;
        }
        if is_goal(&state) {
            return Ok(cost);
        }
        for (next, edge) in transitions(&state) {
            if edge < 0 {
                return Err(SearchError::NegativeCost(edge));
            }
            let next_cost = cost + edge;
            if best.get(&next).is_none_or(|&b| next_cost < b) {
                best.insert(next.clone(), next_cost);
                heap.push(Reverse(Entry {
                    cost: next_cost,
                    seq,
                    state: next,
                }));
                seq += 1;
            }
        }
    }
    Err(SearchError::NoPath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::vec2::Vec2;

    fn grid_moves(grid: &Grid, pos: Vec2) -> Vec<(Vec2, i64)> {
        grid.neighbors4(pos, |cell| cell != b'#')
            .into_iter()
            .map(|next| (next, 1))
            .collect()
    }

    #[test]
    fn unweighted_route_around_center_wall() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let goal = Vec2::new(2, 2);
        let cost = search(
            [Vec2::new(0, 0)],
            |&pos| pos == goal,
            |&pos| grid_moves(&grid, pos),
            SearchMode::Unweighted,
        )
        .unwrap();
        assert_eq!(cost, 4);
    }

    #[test]
    fn weighted_unit_costs_match_unweighted() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let goal = Vec2::new(2, 2);
        let cost = search(
            [Vec2::new(0, 0)],
            |&pos| pos == goal,
            |&pos| grid_moves(&grid, pos),
            SearchMode::Weighted,
        )
        .unwrap();
        assert_eq!(cost, 4);
    }

    #[test]
    fn goal_at_start_costs_zero() {
        for mode in [SearchMode::Unweighted, SearchMode::Weighted] {
            let cost = search([7u8], |&s| s == 7, |_| Vec::<(u8, i64)>::new(), mode).unwrap();
            assert_eq!(cost, 0);
        }
    }

    #[test]
    fn unreachable_goal_is_no_path_not_zero() {
        let grid = Grid::parse("..#\n###\n#..").unwrap();
        let goal = Vec2::new(2, 2);
        let result = search(
            [Vec2::new(0, 0)],
            |&pos| pos == goal,
            |&pos| grid_moves(&grid, pos),
            SearchMode::Unweighted,
        );
        assert_eq!(result, Err(SearchError::NoPath));
    }

    #[test]
    fn negative_cost_fails_fast() {
        let result = search(
            [0i32],
            |&s| s == 10,
            |&s| vec![(s + 1, -1)],
            SearchMode::Weighted,
        );
        assert_eq!(result, Err(SearchError::NegativeCost(-1)));
    }

    #[test]
    fn weighted_prefers_cheap_detour() {
        // 0 -> 2 directly costs 10; via 1 costs 3.
        let edges = |&s: &u8| -> Vec<(u8, i64)> {
            match s {
                0 => vec![(2, 10), (1, 1)],
                1 => vec![(2, 2)],
                _ => vec![],
            }
        };
        let cost = search([0u8], |&s| s == 2, edges, SearchMode::Weighted).unwrap();
        assert_eq!(cost, 3);
    }

    #[test]
    fn distances_cover_reachable_states_only() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let dist = distances(
            [Vec2::new(0, 0)],
            |&pos| grid_moves(&grid, pos),
            SearchMode::Unweighted,
        )
        .unwrap();
        assert_eq!(dist.len(), 8); // every open cell
        assert_eq!(dist[&Vec2::new(0, 0)], 0);
        assert_eq!(dist[&Vec2::new(2, 2)], 4);
        assert!(!dist.contains_key(&Vec2::new(1, 1)));
    }

    #[test]
    fn multi_start_takes_the_nearest() {
        let grid = Grid::parse(".....").unwrap();
        let goal = Vec2::new(0, 4);
        let cost = search(
            [Vec2::new(0, 0), Vec2::new(0, 3)],
            |&pos| pos == goal,
            |&pos| grid_moves(&grid, pos),
            SearchMode::Unweighted,
        )
        .unwrap();
        assert_eq!(cost, 1);
    }
}
