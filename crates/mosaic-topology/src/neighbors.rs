//! Creation-order neighbor computation.
//!
//! A cell only ever sees neighbors that were created before it. For index `i`
//! the four cardinal neighbors are looked up on the lattice and reported when
//! their own index is strictly less than `i`; later cells are absent even if
//! they exist by the time anyone asks.

use crate::{coord_to_spiral, spiral_to_coord, GridCoord, SpiralIndex, CARDINAL_CONNECTIONS};

/// One of the four cardinal directions, in canvas order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in canvas order: top, right, bottom, left.
    pub const ALL: [Direction; CARDINAL_CONNECTIONS] =
        [Direction::Top, Direction::Right, Direction::Bottom, Direction::Left];

    /// Position of this direction in canvas order.
    #[inline]
    pub const fn slot(self) -> usize {
        self as usize
    }

    /// Lattice offset for one step in this direction.
    #[inline]
    pub const fn offset(self) -> GridCoord {
        GridCoord::CARDINAL_DIRECTIONS[self as usize]
    }
}

/// The earlier-created neighbors of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorNeighbors {
    slots: [Option<SpiralIndex>; CARDINAL_CONNECTIONS],
}

impl PriorNeighbors {
    /// Compute the prior neighbors of `index`.
    ///
    /// Neighbors whose index would not fit in a `u64` are absent.
    pub fn of(index: SpiralIndex) -> Self {
        let coord = spiral_to_coord(index);
        let slots = coord
            .cardinal_neighbors()
            .map(|neighbor| coord_to_spiral(neighbor).filter(|&candidate| candidate < index));
        Self { slots }
    }

    /// Neighbor in the given direction, if it was created earlier.
    #[inline]
    pub fn get(&self, direction: Direction) -> Option<SpiralIndex> {
        self.slots[direction.slot()]
    }

    pub fn top(&self) -> Option<SpiralIndex> {
        self.get(Direction::Top)
    }

    pub fn right(&self) -> Option<SpiralIndex> {
        self.get(Direction::Right)
    }

    pub fn bottom(&self) -> Option<SpiralIndex> {
        self.get(Direction::Bottom)
    }

    pub fn left(&self) -> Option<SpiralIndex> {
        self.get(Direction::Left)
    }

    /// All four slots in canvas order.
    pub fn as_array(&self) -> [Option<SpiralIndex>; CARDINAL_CONNECTIONS] {
        self.slots
    }

    /// Present neighbors with their direction, in canvas order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, SpiralIndex)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|index| (d, index)))
    }

    /// Number of earlier neighbors (0 to 4).
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Check if two coordinates are cardinal neighbors.
pub fn are_neighbors(a: GridCoord, b: GridCoord) -> bool {
    GridCoord::CARDINAL_DIRECTIONS.contains(&(b - a))
}
