//! Mosaic Board
//!
//! A shared canvas that grows one cell at a time. Callers reserve the next
//! free cell, look at what their earlier neighbors drew, then draw their own.
//!
//! # Flow
//!
//! 1. The board is started (Idle → Started)
//! 2. `reserve_canvas` hands out the next spiral index, subject to the
//!    frontier ring's concurrency ceiling
//! 3. `get_my_canvas` composes the top/right/bottom/left view around it
//! 4. `draw` stores 16 words of content and frees the reservation
//! 5. The board is finished (Started → Finished)
//!
//! Cell positions come from `mosaic_topology`; nothing here stores
//! coordinates.

mod error;
mod drawing;
mod lifecycle;
mod cells;
mod reservation;
mod composer;
mod board;

pub use error::{BoardError, Result};
pub use drawing::{CallerId, CanvasView, Chunk, Drawing, CHUNK_COUNT};
pub use lifecycle::BoardState;
pub use cells::{Cell, CellStore};
pub use reservation::{ReservationPool, ring_capacity};
pub use composer::{compose_view, compose_with};
pub use board::{Board, BoardStats};

pub use mosaic_topology::{Direction, SpiralIndex};
