//! Directional redirect state machine
//!
//! Beam and pipe puzzles move a (position, direction) state through the
//! grid, with certain cell symbols redirecting or splitting the incoming
//! direction. The transition rule is a finite lookup table keyed by
//! (symbol, incoming direction), so it is plain data and testable in
//! isolation.

use crate::grid::Grid;
use crate::vec2::Vec2;
use std::collections::{HashMap, HashSet};

/// Outgoing directions for one (symbol, incoming direction) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Continue in the incoming direction.
    Straight,
    /// Leave in a single new direction (mirror).
    One(Vec2),
    /// Leave in two directions (splitter).
    Two(Vec2, Vec2),
}

/// Lookup table mapping (cell symbol, incoming direction) to outgoing
/// directions. Pairs without an entry pass straight through.
#[derive(Debug, Clone, Default)]
pub struct RedirectTable {
    rules: HashMap<(u8, Vec2), Redirect>,
}

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a rule for `symbol` hit while travelling `incoming`.
    pub fn add_rule(&mut self, symbol: u8, incoming: Vec2, redirect: Redirect) {
        self.rules.insert((symbol, incoming), redirect);
    }

    /// Rule for `symbol` hit while travelling `incoming`;
    /// [`Redirect::Straight`] when no rule is installed.
    pub fn outgoing(&self, symbol: u8, incoming: Vec2) -> Redirect {
        self.rules
            .get(&(symbol, incoming))
            .copied()
            .unwrap_or(Redirect::Straight)
    }

    /// The standard mirror/splitter optics: `/` and `\` reflect, `|` and
    /// `-` split beams hitting their broad side.
    pub fn mirrors() -> Self {
        let mut table = Self::new();
        for incoming in Vec2::ORTHOGONAL {
            // `/`: east<->north, west<->south. A quarter turn whose
            // handedness flips with the travel axis.
            let slash = if incoming.row == 0 {
                incoming.rotate_left()
            } else {
                incoming.rotate_right()
            };
            table.add_rule(b'/', incoming, Redirect::One(slash));
            table.add_rule(b'\\', incoming, Redirect::One(-slash));
        }
        table.add_rule(b'|', Vec2::EAST, Redirect::Two(Vec2::NORTH, Vec2::SOUTH));
        table.add_rule(b'|', Vec2::WEST, Redirect::Two(Vec2::NORTH, Vec2::SOUTH));
        table.add_rule(b'-', Vec2::NORTH, Redirect::Two(Vec2::EAST, Vec2::WEST));
        table.add_rule(b'-', Vec2::SOUTH, Redirect::Two(Vec2::EAST, Vec2::WEST));
        table
    }

    /// Trace a beam through `grid` and return the set of cells it visits.
    ///
    /// `entry` is the position the beam occupies *before* its first
    /// advance, normally one step outside the grid edge. The beam
    /// advances one cell at a time, applying this table at each cell;
    /// split branches are queued. States are deduplicated on
    /// (position, incoming direction), which guarantees termination on
    /// cyclic layouts.
    pub fn trace(&self, grid: &Grid, entry: Vec2, dir: Vec2) -> HashSet<Vec2> {
        let mut pending = vec![(entry, dir)];
        let mut visited: HashSet<(Vec2, Vec2)> = HashSet::new();

        while let Some((mut pos, mut dir)) = pending.pop() {
            loop {
                let next = pos + dir;
                let Some(symbol) = grid.get(next) else {
                    break;
                };
                if !visited.insert((next, dir)) {
                    break;
                }
                pos = next;
                match self.outgoing(symbol, dir) {
                    Redirect::Straight => {}
                    Redirect::One(out) => dir = out,
                    Redirect::Two(first, second) => {
                        pending.push((pos, second));
                        dir = first;
                    }
                }
            }
        }

        visited.into_iter().map(|(pos, _)| pos).collect()
    }
}
