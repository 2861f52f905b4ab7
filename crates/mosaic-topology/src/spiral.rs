//! Diamond spiral enumeration of the board lattice.
//!
//! Every cell gets a creation-order index. Index 0 is the origin; after that
//! the spiral fills diamond-shaped rings of increasing Manhattan radius:
//!
//! - Ring 0: just the origin (1 slot)
//! - Ring k > 0: the 4k coordinates with |x| + |y| = k
//!
//! Each ring starts at its top corner `(0, k)` and walks clockwise along four
//! edges of `k` cells: top → right → bottom → left, stopping one cell short of
//! the top corner again.
//!
//! ```text
//!             5
//!         12  1  6
//!      11  4  0  2  7
//!         10  3  8
//!             9
//! ```

use crate::GridCoord;

/// A spiral index - creation-order identifier of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// Origin slot.
    pub const ORIGIN: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The index created right after this one.
    #[inline]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-4
    /// Ring 2: indices 5-12
    /// Ring k: indices from total_slots_through(k-1) to total_slots_through(k)-1
    pub fn ring(&self) -> u64 {
        if self.0 == 0 {
            return 0;
        }

        // Smallest k with 1 + 2k(k+1) > index. Widened so the probe
        // never overflows near u64::MAX.
        let total = |k: u64| -> u128 {
            let k = k as u128;
            1 + 2 * k * (k + 1)
        };
        let target = self.0 as u128;

        let mut low = 1u64;
        let mut high = ((self.0 as f64).sqrt() as u64) + 2;

        while low < high {
            let mid = low + (high - low) / 2;
            if total(mid) <= target {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// Offset within the ring (0 to 4k-1 for ring k > 0).
    pub fn offset_in_ring(&self) -> u64 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        self.0 - total_slots_through(ring - 1)
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

impl std::fmt::Display for SpiralIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Total number of slots in ring k.
///
/// - Ring 0: 1 slot (origin)
/// - Ring k > 0: 4k slots
#[inline]
pub const fn slots_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        4 * ring
    }
}

/// Total slots through ring k (inclusive).
///
/// Formula: 1 + 4(1 + 2 + … + k) = 2k² + 2k + 1
#[inline]
pub const fn total_slots_through(ring: u64) -> u64 {
    1 + 2 * ring * (ring + 1)
}

/// Iterator over spiral coordinates.
pub struct Spiral {
    current: u64,
    limit: Option<u64>,
}

impl Spiral {
    /// Create an infinite spiral iterator starting from origin.
    pub fn new() -> Self {
        Self {
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields `count` coordinates.
    pub fn take_slots(count: u64) -> Self {
        Self {
            current: 0,
            limit: Some(count),
        }
    }

    /// Create a spiral iterator for a specific ring range (inclusive).
    pub fn rings(start_ring: u64, end_ring: u64) -> Self {
        let start_slot = if start_ring == 0 {
            0
        } else {
            total_slots_through(start_ring - 1)
        };

        Self {
            current: start_slot,
            limit: Some(total_slots_through(end_ring)),
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Spiral {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let coord = spiral_to_coord(SpiralIndex(self.current));
        self.current += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current) as usize;
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}

// Edge starts and per-step directions, clockwise from the top corner.
// Multiply by the ring radius for the corner, step `pos` times along the edge.
const EDGE_CORNERS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const EDGE_DIRECTIONS: [(i64, i64); 4] = [(1, -1), (-1, -1), (-1, 1), (1, 1)];

/// Convert a spiral index to a lattice coordinate.
pub fn spiral_to_coord(index: SpiralIndex) -> GridCoord {
    if index.0 == 0 {
        return GridCoord::ORIGIN;
    }

    let ring = index.ring();
    let offset = index.offset_in_ring();

    let edge = (offset / ring) as usize;
    let pos = (offset % ring) as i64;
    let k = ring as i64;

    let (cx, cy) = EDGE_CORNERS[edge];
    let (dx, dy) = EDGE_DIRECTIONS[edge];

    GridCoord::new(cx * k + dx * pos, cy * k + dy * pos)
}

/// Convert a lattice coordinate to its spiral index.
///
/// Inverse of `spiral_to_coord`. Returns `None` for coordinates so far out
/// that their index does not fit in a `u64`; no such cell can ever exist.
pub fn coord_to_spiral(coord: GridCoord) -> Option<SpiralIndex> {
    if coord == GridCoord::ORIGIN {
        return Some(SpiralIndex::ORIGIN);
    }

    let GridCoord { x, y } = coord;
    // |x| + |y| reaches 2^64 at the lattice corners, so stay in u128.
    let ring = x.unsigned_abs() as u128 + y.unsigned_abs() as u128;

    // The four half-open quadrants partition the ring without overlap.
    let (edge, pos) = if x >= 0 && y > 0 {
        (0, x.unsigned_abs())
    } else if x > 0 && y <= 0 {
        (1, y.unsigned_abs())
    } else if x <= 0 && y < 0 {
        (2, x.unsigned_abs())
    } else {
        (3, y.unsigned_abs())
    };

    let before = 1 + 2 * (ring - 1) * ring;
    let index = before + edge * ring + pos as u128;
    u64::try_from(index).ok().map(SpiralIndex)
}
