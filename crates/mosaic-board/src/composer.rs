//! Canvas composition: what a caller sees around its cell.

use mosaic_topology::{PriorNeighbors, SpiralIndex};

use crate::cells::CellStore;
use crate::drawing::{CanvasView, Drawing};

/// Compose the view around `index`, reading neighbor content through `read`.
///
/// Directions without an earlier neighbor are left empty.
pub fn compose_with<F>(index: SpiralIndex, read: F) -> CanvasView
where
    F: Fn(SpiralIndex) -> Drawing,
{
    let slots = PriorNeighbors::of(index).as_array();
    CanvasView(slots.map(|slot| slot.map(&read).unwrap_or(Drawing::EMPTY)))
}

/// Compose the view around `index` from stored cells.
pub fn compose_view(cells: &CellStore, index: SpiralIndex) -> CanvasView {
    compose_with(index, |neighbor| cells.read(neighbor))
}
