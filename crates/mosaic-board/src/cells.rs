//! Cell storage keyed by spiral index.

use std::collections::HashMap;

use mosaic_topology::SpiralIndex;
use serde::{Deserialize, Serialize};

use crate::drawing::{CallerId, Drawing};
use crate::error::{BoardError, Result};

/// One board cell.
///
/// Cells come into existence when reserved and are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Content, `Drawing::EMPTY` until drawn
    pub content: Drawing,
    /// Caller that reserved (and later drew) this cell
    pub reserved_by: CallerId,
    /// Whether the drawing has been stored
    pub drawn: bool,
}

impl Cell {
    fn reserved(caller: CallerId) -> Self {
        Self {
            content: Drawing::EMPTY,
            reserved_by: caller,
            drawn: false,
        }
    }
}

/// All cells created so far.
#[derive(Debug, Default)]
pub struct CellStore {
    cells: HashMap<SpiralIndex, Cell>,
    drawn: usize,
}

impl CellStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize a freshly reserved cell.
    pub(crate) fn create(&mut self, index: SpiralIndex, caller: CallerId) {
        self.cells.insert(index, Cell::reserved(caller));
    }

    /// Check that `caller` may store `content` at `index` without touching anything.
    pub fn check_write(&self, caller: CallerId, index: SpiralIndex, content: &Drawing) -> Result<()> {
        if content.is_empty() {
            return Err(BoardError::EmptyDrawing);
        }

        match self.cells.get(&index) {
            Some(cell) if cell.drawn => Err(BoardError::AlreadyDrawn { index }),
            Some(cell) if cell.reserved_by == caller => Ok(()),
            _ => Err(BoardError::NotReserved { index }),
        }
    }

    /// Store a drawing in a reserved cell and mark it drawn.
    pub fn write(&mut self, caller: CallerId, index: SpiralIndex, content: Drawing) -> Result<()> {
        self.check_write(caller, index, &content)?;

        if let Some(cell) = self.cells.get_mut(&index) {
            cell.content = content;
            cell.drawn = true;
            self.drawn += 1;
        }
        Ok(())
    }

    /// Content at `index`, or the empty sentinel if never created or not drawn yet.
    pub fn read(&self, index: SpiralIndex) -> Drawing {
        self.cells
            .get(&index)
            .filter(|cell| cell.drawn)
            .map(|cell| cell.content)
            .unwrap_or(Drawing::EMPTY)
    }

    /// Get a cell record.
    pub fn get(&self, index: SpiralIndex) -> Option<&Cell> {
        self.cells.get(&index)
    }

    /// Number of cells carrying a drawing.
    pub fn drawn_count(&self) -> usize {
        self.drawn
    }

    /// Number of cells created (reserved or drawn).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
