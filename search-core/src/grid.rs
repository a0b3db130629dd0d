//! Grid adapter
//!
//! Maps puzzle text onto a rectangular byte grid and exposes the neighbor
//! rules the search engine consumes. Positions are [`Vec2`] values with
//! row 0 at the top; lookups past the edge return `None`, or wrap per
//! axis for the toroidal variant.

use crate::error::GridError;
use crate::vec2::Vec2;

/// A rectangular grid of single-byte ASCII cells.
///
/// Equality and hashing cover the full cell contents, so a `Grid` can be
/// used directly as a configuration in cycle detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Parse newline-separated rows into a grid.
    ///
    /// Empty input yields a 0×0 grid. Rows must be equal-length ASCII;
    /// a trailing `\r` per row is tolerated for CRLF input.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (index, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if !line.is_ascii() {
                return Err(GridError::NonAscii(index));
            }
            if index == 0 {
                cols = line.len();
            } else if line.len() != cols {
                return Err(GridError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line.as_bytes());
            rows += 1;
        }

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Cell at `pos`, or `None` out of bounds.
    pub fn get(&self, pos: Vec2) -> Option<u8> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.row as usize * self.cols + pos.col as usize])
    }

    /// Toroidal lookup: wraps per axis via modulo onto the finite grid.
    /// `None` only for an empty grid.
    pub fn get_wrapped(&self, pos: Vec2) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let row = pos.row.rem_euclid(self.rows as i32) as usize;
        let col = pos.col.rem_euclid(self.cols as i32) as usize;
        Some(self.cells[row * self.cols + col])
    }

    /// Overwrite the cell at `pos`; returns false when out of bounds.
    pub fn set(&mut self, pos: Vec2, value: u8) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        self.cells[pos.row as usize * self.cols + pos.col as usize] = value;
        true
    }

    /// Position of the first cell equal to `needle`, row-major.
    pub fn find(&self, needle: u8) -> Option<Vec2> {
        self.cells.iter().position(|&cell| cell == needle).map(|i| {
            Vec2::new(
                (i / self.cols) as i32,
                (i % self.cols) as i32,
            )
        })
    }

    /// All positions, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| Vec2::new(r as i32, c as i32)))
    }

    /// In-bounds neighbors of `pos` over `offsets`, kept when `admit`
    /// approves the (offset, source cell, target cell) triple. Never
    /// yields out-of-bounds positions; yields nothing when `pos` itself
    /// is out of bounds.
    pub fn neighbors_where(
        &self,
        pos: Vec2,
        offsets: &[Vec2],
        admit: impl Fn(Vec2, u8, u8) -> bool,
    ) -> Vec<Vec2> {
        let Some(from) = self.get(pos) else {
            return Vec::new();
        };
        offsets
            .iter()
            .filter_map(|&offset| {
                let next = pos + offset;
                self.get(next)
                    .filter(|&to| admit(offset, from, to))
                    .map(|_| next)
            })
            .collect()
    }

    /// Orthogonal neighbors whose cell satisfies `passable`.
    pub fn neighbors4(&self, pos: Vec2, passable: impl Fn(u8) -> bool) -> Vec<Vec2> {
        self.neighbors_where(pos, &Vec2::ORTHOGONAL, |_, _, to| passable(to))
    }

    /// Orthogonal and diagonal neighbors whose cell satisfies `passable`.
    pub fn neighbors8(&self, pos: Vec2, passable: impl Fn(u8) -> bool) -> Vec<Vec2> {
        self.neighbors_where(pos, &Vec2::ADJACENT8, |_, _, to| passable(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records_dimensions_and_cells() {
        let grid = Grid::parse("ab\ncd\nef").unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 2));
        assert_eq!(grid.get(Vec2::new(0, 0)), Some(b'a'));
        assert_eq!(grid.get(Vec2::new(2, 1)), Some(b'f'));
    }

    #[test]
    fn empty_input_yields_zero_size_grid() {
        let grid = Grid::parse("").unwrap();
        assert!(grid.is_empty());
        assert_eq!((grid.rows(), grid.cols()), (0, 0));
        assert!(grid.neighbors4(Vec2::new(0, 0), |_| true).is_empty());
        assert!(grid.neighbors8(Vec2::new(0, 0), |_| true).is_empty());
        assert_eq!(grid.get_wrapped(Vec2::new(5, -3)), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Grid::parse("abc\nde"),
            Err(GridError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn non_ascii_is_rejected() {
        assert_eq!(Grid::parse("ab\nc\u{e9}"), Err(GridError::NonAscii(1)));
    }

    #[test]
    fn parse_is_idempotent_by_value() {
        let text = "..#\n#..\n...";
        assert_eq!(Grid::parse(text).unwrap(), Grid::parse(text).unwrap());
    }

    #[test]
    fn out_of_bounds_is_none_bounded_but_wraps_toroidally() {
        let grid = Grid::parse("ab\ncd").unwrap();
        assert_eq!(grid.get(Vec2::new(-1, 0)), None);
        assert_eq!(grid.get(Vec2::new(0, 2)), None);
        assert_eq!(grid.get_wrapped(Vec2::new(-1, 0)), Some(b'c'));
        assert_eq!(grid.get_wrapped(Vec2::new(2, 3)), Some(b'b'));
        assert_eq!(grid.get_wrapped(Vec2::new(-3, -3)), Some(b'd'));
    }

    #[test]
    fn neighbors_exclude_walls_and_edges() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let mut near_corner = grid.neighbors4(Vec2::new(0, 0), |cell| cell != b'#');
        near_corner.sort();
        assert_eq!(near_corner, vec![Vec2::new(0, 1), Vec2::new(1, 0)]);

        let mid_edge = grid.neighbors4(Vec2::new(0, 1), |cell| cell != b'#');
        assert!(!mid_edge.contains(&Vec2::new(1, 1)));
        assert!(!mid_edge.contains(&Vec2::new(-1, 1)));
    }

    #[test]
    fn neighbors_where_sees_the_offset() {
        // One-way rule: only eastward moves admitted.
        let grid = Grid::parse("...").unwrap();
        let east_only = grid.neighbors_where(Vec2::new(0, 1), &Vec2::ORTHOGONAL, |offset, _, _| {
            offset == Vec2::EAST
        });
        assert_eq!(east_only, vec![Vec2::new(0, 2)]);
    }

    #[test]
    fn find_and_set() {
        let mut grid = Grid::parse(".S.").unwrap();
        assert_eq!(grid.find(b'S'), Some(Vec2::new(0, 1)));
        assert_eq!(grid.find(b'X'), None);
        assert!(grid.set(Vec2::new(0, 1), b'.'));
        assert_eq!(grid.find(b'S'), None);
        assert!(!grid.set(Vec2::new(1, 0), b'.'));
    }
}
