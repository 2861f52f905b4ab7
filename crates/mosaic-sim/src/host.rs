//! Serializing host: many callers, one board.
//!
//! The board itself is single-threaded. The host puts it behind one async
//! mutex so every call is a critical section, and records each accepted or
//! throttled call on the event timeline in the same step. Callers that hit
//! the ceiling park on a `Notify` until some cell is drawn.

use std::sync::Arc;

use mosaic_board::{Board, BoardError, BoardStats, CallerId, CanvasView, Drawing, SpiralIndex};
use mosaic_topology::spiral_to_coord;
use tokio::sync::{Mutex, Notify};
use tracing::{debug, info};

use crate::events::BoardEvent;

struct HostState {
    board: Board,
    events: Vec<BoardEvent>,
    frame: u64,
    /// Stop handing out cells at this index
    cell_limit: u64,
    max_outstanding: usize,
}

impl HostState {
    fn record(&mut self, event: impl FnOnce(u64) -> BoardEvent) {
        let frame = self.frame;
        self.events.push(event(frame));
        self.frame += 1;
    }

    fn try_reserve(&mut self, caller: CallerId, record_throttle: bool) -> Result<Reservation, BoardError> {
        if self.board.stats().next_index.value() >= self.cell_limit {
            return Ok(Reservation::Exhausted);
        }

        match self.board.reserve_canvas(caller) {
            Ok(index) => {
                let stats = self.board.stats();
                self.max_outstanding = self.max_outstanding.max(stats.outstanding);
                self.record(|frame| BoardEvent::Reserved {
                    caller,
                    index,
                    coord: spiral_to_coord(index),
                    outstanding: stats.outstanding,
                    capacity: stats.capacity,
                    frame,
                });
                Ok(Reservation::Granted(index))
            }
            Err(BoardError::MaxConcurrencyReached { outstanding, capacity }) => {
                if record_throttle {
                    self.record(|frame| BoardEvent::Throttled {
                        caller,
                        outstanding,
                        capacity,
                        frame,
                    });
                }
                Ok(Reservation::Throttled)
            }
            Err(e) => Err(e),
        }
    }
}

/// Outcome of a reservation attempt through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// The caller now holds this cell
    Granted(SpiralIndex),
    /// The ceiling is reached; try again after others draw
    Throttled,
    /// The session's cell quota is used up
    Exhausted,
}

/// A board shared between caller tasks.
#[derive(Clone)]
pub struct SharedBoard {
    inner: Arc<Mutex<HostState>>,
    /// Signalled after every draw
    space: Arc<Notify>,
}

impl SharedBoard {
    /// Wrap a fresh board that hands out at most `cell_limit` cells.
    pub fn new(cell_limit: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HostState {
                board: Board::new(),
                events: Vec::new(),
                frame: 0,
                cell_limit,
                max_outstanding: 0,
            })),
            space: Arc::new(Notify::new()),
        }
    }

    pub async fn start(&self) -> Result<(), BoardError> {
        let mut state = self.inner.lock().await;
        state.board.start()?;
        state.record(|frame| BoardEvent::Started { frame });
        Ok(())
    }

    pub async fn finish(&self) -> Result<BoardStats, BoardError> {
        let mut state = self.inner.lock().await;
        state.board.finish()?;
        let stats = state.board.stats();
        state.record(|frame| BoardEvent::Finished { drawn: stats.drawn, frame });
        Ok(stats)
    }

    /// Try to reserve the next cell for `caller`.
    pub async fn reserve(&self, caller: CallerId) -> Result<Reservation, BoardError> {
        self.inner.lock().await.try_reserve(caller, true)
    }

    /// Reserve the next cell, parking while the ceiling is reached.
    ///
    /// The wait is recorded as one `Throttled` event however many draws it
    /// takes before a slot opens. Never returns `Reservation::Throttled`.
    pub async fn reserve_waiting(&self, caller: CallerId) -> Result<Reservation, BoardError> {
        let mut throttled = false;
        loop {
            // Registered before the attempt, so a draw in between still wakes us.
            let space = self.space.notified();
            tokio::pin!(space);
            space.as_mut().enable();

            match self.inner.lock().await.try_reserve(caller, !throttled)? {
                Reservation::Throttled => {
                    if !throttled {
                        debug!(%caller, "Waiting for a free slot");
                    }
                    throttled = true;
                }
                other => return Ok(other),
            }
            space.await;
        }
    }

    pub async fn canvas(&self, caller: CallerId) -> Result<CanvasView, BoardError> {
        self.inner.lock().await.board.get_my_canvas(caller)
    }

    pub async fn draw(&self, caller: CallerId, drawing: Drawing) -> Result<SpiralIndex, BoardError> {
        let mut state = self.inner.lock().await;
        let index = state.board.draw(caller, drawing)?;
        state.record(|frame| BoardEvent::Drawn { caller, index, frame });
        self.space.notify_waiters();
        Ok(index)
    }

    pub async fn stats(&self) -> BoardStats {
        self.inner.lock().await.board.stats()
    }

    /// Highest number of simultaneously outstanding reservations seen.
    pub async fn max_outstanding(&self) -> usize {
        self.inner.lock().await.max_outstanding
    }

    /// Content stored at `index`.
    pub async fn read(&self, index: SpiralIndex) -> Drawing {
        self.inner.lock().await.board.read(index)
    }

    /// Copy of the timeline so far.
    pub async fn events(&self) -> Vec<BoardEvent> {
        let state = self.inner.lock().await;
        debug!(events = state.events.len(), "Timeline exported");
        state.events.clone()
    }

    /// Log a one-line summary of the board.
    pub async fn log_summary(&self) {
        let stats = self.stats().await;
        info!(
            state = %stats.state,
            drawn = stats.drawn,
            outstanding = stats.outstanding,
            frontier_ring = stats.frontier_ring,
            "Board summary"
        );
    }
}
