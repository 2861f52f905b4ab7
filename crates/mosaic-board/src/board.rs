//! The board: lifecycle, reservations and cells behind one context object.
//!
//! Every method is one atomic step. Checks run before mutation, so a call
//! either applies fully or returns an error with the board untouched. The
//! board has no interior mutability; hosts that share it between callers
//! serialize access themselves.

use mosaic_topology::{SpiralIndex, spiral_to_coord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cells::{Cell, CellStore};
use crate::composer::compose_view;
use crate::drawing::{CallerId, CanvasView, Drawing};
use crate::error::{BoardError, Result};
use crate::lifecycle::BoardState;
use crate::reservation::ReservationPool;

/// Point-in-time summary of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub state: BoardState,
    /// Next index a reservation would receive
    pub next_index: SpiralIndex,
    /// Reserved, not yet drawn
    pub outstanding: usize,
    /// Current concurrency ceiling
    pub capacity: usize,
    /// Ring of the oldest undrawn cell
    pub frontier_ring: u64,
    /// Cells carrying a drawing
    pub drawn: usize,
}

/// A shared canvas filled one cell at a time.
#[derive(Debug, Default)]
pub struct Board {
    state: BoardState,
    pool: ReservationPool,
    cells: CellStore,
}

impl Board {
    /// Create an idle board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the board. The origin (index 0) is the first cell handed out.
    pub fn start(&mut self) -> Result<()> {
        self.state.start()?;
        info!("Board started");
        Ok(())
    }

    /// Close the board for good.
    pub fn finish(&mut self) -> Result<()> {
        self.state.finish()?;
        info!(
            drawn = self.cells.drawn_count(),
            outstanding = self.pool.outstanding(),
            "Board finished"
        );
        Ok(())
    }

    /// Reserve the next cell for `caller`.
    pub fn reserve_canvas(&mut self, caller: CallerId) -> Result<SpiralIndex> {
        self.state.require_started()?;

        let index = self.pool.reserve(caller).inspect_err(|e| {
            debug!(%caller, error = %e, "Reservation rejected");
        })?;
        self.cells.create(index, caller);

        debug!(
            %caller,
            %index,
            coord = %spiral_to_coord(index),
            outstanding = self.pool.outstanding(),
            capacity = self.pool.capacity(),
            "Canvas reserved"
        );
        Ok(index)
    }

    /// Store `drawing` in the cell `caller` currently holds.
    pub fn draw(&mut self, caller: CallerId, drawing: Drawing) -> Result<SpiralIndex> {
        self.state.require_started()?;
        if drawing.is_empty() {
            return Err(BoardError::EmptyDrawing);
        }

        let index = self.pool.held_by(caller).ok_or(BoardError::NoReservation)?;
        self.draw_at(caller, index, drawing)?;
        Ok(index)
    }

    /// Store `drawing` at an explicit index reserved by `caller`.
    pub fn draw_at(&mut self, caller: CallerId, index: SpiralIndex, drawing: Drawing) -> Result<()> {
        self.state.require_started()?;
        self.cells.check_write(caller, index, &drawing)?;
        if self.pool.holder(index) != Some(caller) {
            return Err(BoardError::NotReserved { index });
        }

        self.cells.write(caller, index, drawing)?;
        self.pool.release(index);

        debug!(
            %caller,
            %index,
            drawn = self.cells.drawn_count(),
            frontier_ring = self.pool.frontier_ring(),
            "Cell drawn"
        );
        Ok(())
    }

    /// The four-neighbor view around the cell `caller` currently holds.
    ///
    /// A caller without an active reservation sees a blank view.
    pub fn get_my_canvas(&self, caller: CallerId) -> Result<CanvasView> {
        self.state.require_started()?;

        Ok(match self.pool.held_by(caller) {
            Some(index) => compose_view(&self.cells, index),
            None => CanvasView::BLANK,
        })
    }

    /// The four-neighbor view around any index.
    pub fn compose_view(&self, index: SpiralIndex) -> CanvasView {
        compose_view(&self.cells, index)
    }

    /// Stored content, or the empty sentinel.
    pub fn read(&self, index: SpiralIndex) -> Drawing {
        self.cells.read(index)
    }

    pub fn cell(&self, index: SpiralIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    /// Index `caller` currently holds, if any.
    pub fn reservation_of(&self, caller: CallerId) -> Option<SpiralIndex> {
        self.pool.held_by(caller)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            state: self.state,
            next_index: self.pool.next_index(),
            outstanding: self.pool.outstanding(),
            capacity: self.pool.capacity(),
            frontier_ring: self.pool.frontier_ring(),
            drawn: self.cells.drawn_count(),
        }
    }
}
