//! Reservation pool with a ring-derived concurrency ceiling.
//!
//! # Frontier ring
//!
//! The frontier is the ring holding the oldest cell that has not been drawn
//! yet: the smallest outstanding reservation, or `next_index` when nothing is
//! outstanding. While that ring is open, at most as many cells as the ring
//! holds may be in flight at once:
//!
//! - frontier ring 0 or 1 → 4 outstanding
//! - frontier ring k > 1  → 4k outstanding
//!
//! The frontier only advances when its oldest cell is drawn, so a burst of
//! reservations can never run further ahead of the drawn area than one ring's
//! worth of cells. The ceiling is recomputed from pool state on every call.

use std::collections::{BTreeMap, HashMap};

use mosaic_topology::{SpiralIndex, RING_GROWTH};

use crate::drawing::CallerId;
use crate::error::{BoardError, Result};

/// Maximum outstanding reservations while `ring` is the frontier.
#[inline]
pub const fn ring_capacity(ring: u64) -> usize {
    let ring = if ring == 0 { 1 } else { ring };
    (RING_GROWTH * ring) as usize
}

/// Hands out spiral indices in creation order.
#[derive(Debug, Default)]
pub struct ReservationPool {
    /// Next index to hand out
    next_index: SpiralIndex,
    /// Reserved, not yet drawn: index → holder
    outstanding: BTreeMap<SpiralIndex, CallerId>,
    /// Holder → its single active reservation
    held: HashMap<CallerId, SpiralIndex>,
}

impl ReservationPool {
    /// Create an empty pool starting at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring whose size bounds the current number of outstanding reservations.
    pub fn frontier_ring(&self) -> u64 {
        self.oldest_open().ring()
    }

    /// Current concurrency ceiling.
    pub fn capacity(&self) -> usize {
        ring_capacity(self.frontier_ring())
    }

    /// Check whether `caller` could reserve right now, without reserving.
    pub fn check_reserve(&self, caller: CallerId) -> Result<()> {
        if let Some(&index) = self.held.get(&caller) {
            return Err(BoardError::AlreadyReserved { index });
        }

        let capacity = self.capacity();
        if self.outstanding.len() >= capacity {
            return Err(BoardError::MaxConcurrencyReached {
                outstanding: self.outstanding.len(),
                capacity,
            });
        }
        Ok(())
    }

    /// Reserve the next index for `caller`.
    pub fn reserve(&mut self, caller: CallerId) -> Result<SpiralIndex> {
        self.check_reserve(caller)?;

        let index = self.next_index;
        self.next_index = index.next();
        self.outstanding.insert(index, caller);
        self.held.insert(caller, index);
        Ok(index)
    }

    /// Drop the reservation on `index`, returning its holder.
    pub fn release(&mut self, index: SpiralIndex) -> Option<CallerId> {
        let caller = self.outstanding.remove(&index)?;
        if self.held.get(&caller) == Some(&index) {
            self.held.remove(&caller);
        }
        Some(caller)
    }

    /// Index the caller currently holds, if any.
    pub fn held_by(&self, caller: CallerId) -> Option<SpiralIndex> {
        self.held.get(&caller).copied()
    }

    /// Holder of an outstanding reservation.
    pub fn holder(&self, index: SpiralIndex) -> Option<CallerId> {
        self.outstanding.get(&index).copied()
    }

    /// Number of reserved-but-undrawn cells.
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

    /// Outstanding indices in ascending order.
    pub fn reserved_indices(&self) -> impl Iterator<Item = SpiralIndex> + '_ {
        self.outstanding.keys().copied()
    }

    /// Next index `reserve` will hand out.
    pub fn next_index(&self) -> SpiralIndex {
        self.next_index
    }

    fn oldest_open(&self) -> SpiralIndex {
        self.outstanding
            .keys()
            .next()
            .copied()
            .unwrap_or(self.next_index)
    }
}
