//! Board events for the session timeline.

use std::collections::{BTreeMap, BTreeSet};

use mosaic_board::{CallerId, SpiralIndex};
use mosaic_topology::GridCoord;
use serde::{Deserialize, Serialize};

/// Events recorded while callers work on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BoardEvent {
    /// The board opened
    Started { frame: u64 },

    /// A caller reserved a cell
    Reserved {
        caller: CallerId,
        index: SpiralIndex,
        coord: GridCoord,
        outstanding: usize,
        capacity: usize,
        frame: u64,
    },

    /// A reservation bounced off the concurrency ceiling
    Throttled {
        caller: CallerId,
        outstanding: usize,
        capacity: usize,
        frame: u64,
    },

    /// A caller stored its drawing
    Drawn {
        caller: CallerId,
        index: SpiralIndex,
        frame: u64,
    },

    /// The board closed
    Finished { drawn: usize, frame: u64 },
}

impl BoardEvent {
    /// Get the frame number for this event.
    pub fn frame(&self) -> u64 {
        match self {
            BoardEvent::Started { frame } => *frame,
            BoardEvent::Reserved { frame, .. } => *frame,
            BoardEvent::Throttled { frame, .. } => *frame,
            BoardEvent::Drawn { frame, .. } => *frame,
            BoardEvent::Finished { frame, .. } => *frame,
        }
    }
}

/// Board state rebuilt from a timeline prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSnapshot {
    pub frame: u64,
    /// Outstanding reservations: index → holder
    pub reserved: BTreeMap<SpiralIndex, CallerId>,
    /// Indices carrying a drawing
    pub drawn: BTreeSet<SpiralIndex>,
    /// Highest ring anything was placed in
    pub outer_ring: u64,
    pub throttled: usize,
    pub finished: bool,
}

impl TimelineSnapshot {
    /// Rebuild board state from events up to (but not including) the given event index.
    pub fn from_events(events: &[BoardEvent], up_to_event: usize) -> Self {
        let mut snap = Self::default();

        for event in events.iter().take(up_to_event) {
            snap.frame = event.frame();
            match event {
                BoardEvent::Started { .. } => {}
                BoardEvent::Reserved { caller, index, .. } => {
                    snap.reserved.insert(*index, *caller);
                    snap.outer_ring = snap.outer_ring.max(index.ring());
                }
                BoardEvent::Throttled { .. } => snap.throttled += 1,
                BoardEvent::Drawn { index, .. } => {
                    snap.reserved.remove(index);
                    snap.drawn.insert(*index);
                }
                BoardEvent::Finished { .. } => snap.finished = true,
            }
        }
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserved(caller: u64, index: u64, frame: u64) -> BoardEvent {
        BoardEvent::Reserved {
            caller: CallerId(caller),
            index: SpiralIndex(index),
            coord: mosaic_topology::spiral_to_coord(SpiralIndex(index)),
            outstanding: 1,
            capacity: 4,
            frame,
        }
    }

    #[test]
    fn event_serialization() {
        let event = reserved(3, 42, 100);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Reserved\""));
        assert!(json.contains("42"));

        let parsed: BoardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.frame(), 100);
    }

    #[test]
    fn snapshot_replays_prefix() {
        let events = vec![
            BoardEvent::Started { frame: 0 },
            reserved(1, 0, 1),
            reserved(2, 1, 2),
            BoardEvent::Drawn { caller: CallerId(1), index: SpiralIndex(0), frame: 3 },
            BoardEvent::Throttled { caller: CallerId(3), outstanding: 4, capacity: 4, frame: 4 },
            BoardEvent::Finished { drawn: 1, frame: 5 },
        ];

        let mid = TimelineSnapshot::from_events(&events, 3);
        assert_eq!(mid.frame, 2);
        assert_eq!(mid.reserved.len(), 2);
        assert!(mid.drawn.is_empty());
        assert_eq!(mid.outer_ring, 1);

        let end = TimelineSnapshot::from_events(&events, events.len());
        assert_eq!(end.reserved.keys().copied().collect::<Vec<_>>(), vec![SpiralIndex(1)]);
        assert!(end.drawn.contains(&SpiralIndex(0)));
        assert_eq!(end.throttled, 1);
        assert!(end.finished);
    }

    #[test]
    fn snapshot_default() {
        let snap = TimelineSnapshot::default();
        assert_eq!(snap.frame, 0);
        assert!(snap.drawn.is_empty());
    }
}
