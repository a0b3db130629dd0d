//! Integer grid vector
//!
//! Positions and directions share one explicit two-field vector type
//! instead of encoding coordinates in a numeric trick. `row` grows
//! downward, `col` grows rightward, so [`Vec2::rotate_right`] is a
//! clockwise turn on screen.

use std::ops::{Add, AddAssign, Neg, Sub};

/// A (row, col) vector used for both grid positions and directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vec2 {
    pub row: i32,
    pub col: i32,
}

impl Vec2 {
    pub const NORTH: Vec2 = Vec2::new(-1, 0);
    pub const SOUTH: Vec2 = Vec2::new(1, 0);
    pub const EAST: Vec2 = Vec2::new(0, 1);
    pub const WEST: Vec2 = Vec2::new(0, -1);

    /// Orthogonal neighbor offsets.
    pub const ORTHOGONAL: [Vec2; 4] = [Vec2::NORTH, Vec2::SOUTH, Vec2::EAST, Vec2::WEST];

    /// Orthogonal plus diagonal neighbor offsets.
    pub const ADJACENT8: [Vec2; 8] = [
        Vec2::new(-1, -1),
        Vec2::new(-1, 0),
        Vec2::new(-1, 1),
        Vec2::new(0, -1),
        Vec2::new(0, 1),
        Vec2::new(1, -1),
        Vec2::new(1, 0),
        Vec2::new(1, 1),
    ];

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Quarter turn counterclockwise.
    pub const fn rotate_left(self) -> Self {
        Vec2::new(-self.col, self.row)
    }

    /// Quarter turn clockwise.
    pub const fn rotate_right(self) -> Self {
        Vec2::new(self.col, -self.row)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.row, -self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotations_cycle_through_compass() {
        assert_eq!(Vec2::EAST.rotate_right(), Vec2::SOUTH);
        assert_eq!(Vec2::SOUTH.rotate_right(), Vec2::WEST);
        assert_eq!(Vec2::WEST.rotate_right(), Vec2::NORTH);
        assert_eq!(Vec2::NORTH.rotate_right(), Vec2::EAST);

        assert_eq!(Vec2::EAST.rotate_left(), Vec2::NORTH);
        assert_eq!(Vec2::NORTH.rotate_left(), Vec2::WEST);
    }

    #[test]
    fn rotate_left_then_right_is_identity() {
        let v = Vec2::new(3, -7);
        assert_eq!(v.rotate_left().rotate_right(), v);
        assert_eq!(v.rotate_right().rotate_right(), -v);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Vec2::new(1, 2);
        let b = Vec2::new(-3, 5);
        assert_eq!(a + b, Vec2::new(-2, 7));
        assert_eq!(a - b, Vec2::new(4, -3));
        assert_eq!(-a, Vec2::new(-1, -2));
    }
}
