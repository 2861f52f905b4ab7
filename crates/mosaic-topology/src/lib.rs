//! Mosaic Board Topology
//!
//! Square-lattice topology with diamond SPIRAL enumeration and
//! creation-order adjacency.
//!
//! # Layout
//!
//! Board cells are addressed only by their creation index. The index maps
//! deterministically onto the integer lattice: index 0 is the origin, and
//! every following index fills diamond rings of increasing Manhattan radius,
//! clockwise from the top corner. Ring k holds 4k cells.
//!
//! # Adjacency
//!
//! Each cell has 4 cardinal neighbors. A cell only reports the neighbors
//! created before it, so adjacency is a pure function of the index and
//! needs no stored coordinates.

mod coord;
mod spiral;
mod neighbors;

pub use coord::GridCoord;
pub use spiral::{SpiralIndex, Spiral, slots_in_ring, total_slots_through, spiral_to_coord, coord_to_spiral};
pub use neighbors::{Direction, PriorNeighbors, are_neighbors};

/// Cardinal connections per cell (top, right, bottom, left)
pub const CARDINAL_CONNECTIONS: usize = 4;

/// Cells added per unit of ring radius: ring k holds 4k cells
pub const RING_GROWTH: u64 = 4;

const _: () = assert!(slots_in_ring(1) == RING_GROWTH);
const _: () = assert!(GridCoord::CARDINAL_DIRECTIONS.len() == CARDINAL_CONNECTIONS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_growth_matches_slot_formula() {
        for ring in 1..50 {
            assert_eq!(slots_in_ring(ring), RING_GROWTH * ring);
            assert_eq!(
                total_slots_through(ring),
                total_slots_through(ring - 1) + slots_in_ring(ring)
            );
        }
    }
}
