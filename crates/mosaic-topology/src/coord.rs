//! Square lattice coordinates.
//!
//! Cells live on the integer lattice Z². Distance from the origin is the
//! Manhattan (taxicab) distance, so the set of cells at distance `k` forms a
//! diamond with four edges of `k` cells each.

use std::ops::{Add, Neg, Sub};

/// A position on the board lattice.
///
/// `y` grows upward: `(0, 1)` is above the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Horizontal axis (right is positive)
    pub x: i64,
    /// Vertical axis (up is positive)
    pub y: i64,
}

impl GridCoord {
    /// Origin of the lattice.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// Ring number in the spiral (0 = origin, 1 = first diamond, etc.)
    pub fn ring(&self) -> u64 {
        self.manhattan_distance(&Self::ORIGIN)
    }

    /// The four cardinal offsets in top, right, bottom, left order.
    pub const CARDINAL_DIRECTIONS: [Self; 4] = [
        Self { x: 0, y: 1 },  // Top
        Self { x: 1, y: 0 },  // Right
        Self { x: 0, y: -1 }, // Bottom
        Self { x: -1, y: 0 }, // Left
    ];

    /// Get all four cardinal neighbors.
    pub fn cardinal_neighbors(&self) -> [Self; 4] {
        Self::CARDINAL_DIRECTIONS.map(|d| *self + d)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for GridCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(GridCoord::ORIGIN.x, 0);
        assert_eq!(GridCoord::ORIGIN.y, 0);
        assert_eq!(GridCoord::ORIGIN.ring(), 0);
    }

    #[test]
    fn manhattan_ring() {
        for dir in GridCoord::CARDINAL_DIRECTIONS {
            assert_eq!(dir.ring(), 1);
        }

        assert_eq!(GridCoord::new(2, 0).ring(), 2);
        assert_eq!(GridCoord::new(1, 1).ring(), 2);
        assert_eq!(GridCoord::new(-3, 4).ring(), 7);
    }

    #[test]
    fn four_cardinal_neighbors() {
        let c = GridCoord::new(3, -2);
        let [top, right, bottom, left] = c.cardinal_neighbors();

        assert_eq!(top, GridCoord::new(3, -1));
        assert_eq!(right, GridCoord::new(4, -2));
        assert_eq!(bottom, GridCoord::new(3, -3));
        assert_eq!(left, GridCoord::new(2, -2));

        for n in c.cardinal_neighbors() {
            assert_eq!(n.manhattan_distance(&c), 1);
        }
    }

    #[test]
    fn addition_subtraction() {
        let a = GridCoord::new(1, 2);
        let b = GridCoord::new(4, -1);

        assert_eq!(a + b, GridCoord::new(5, 1));
        assert_eq!(a - b, GridCoord::new(-3, 3));
        assert_eq!(a + (-b), a - b);
    }
}
