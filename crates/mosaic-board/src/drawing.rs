//! Drawing content, canvas views and caller identity.

use mosaic_topology::{Direction, CARDINAL_CONNECTIONS};
use serde::{Deserialize, Serialize};

/// Number of fixed-width words in one drawing.
pub const CHUNK_COUNT: usize = 16;

/// One word of drawing data.
pub type Chunk = u64;

/// Opaque caller identity supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CallerId(pub u64);

impl std::fmt::Display for CallerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "caller-{}", self.0)
    }
}

/// Content of one cell: 16 words, all-zero meaning "nothing drawn".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Drawing(pub [Chunk; CHUNK_COUNT]);

impl Drawing {
    /// The empty sentinel.
    pub const EMPTY: Self = Self([0; CHUNK_COUNT]);

    /// Create from raw chunks.
    pub const fn new(chunks: [Chunk; CHUNK_COUNT]) -> Self {
        Self(chunks)
    }

    /// True for the all-zero sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    pub fn chunks(&self) -> &[Chunk; CHUNK_COUNT] {
        &self.0
    }
}

impl From<[Chunk; CHUNK_COUNT]> for Drawing {
    fn from(chunks: [Chunk; CHUNK_COUNT]) -> Self {
        Self(chunks)
    }
}

/// The four-neighbor view handed to a caller, in top, right, bottom, left order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CanvasView(pub [Drawing; CARDINAL_CONNECTIONS]);

impl CanvasView {
    /// A view with nothing around it.
    pub const BLANK: Self = Self([Drawing::EMPTY; CARDINAL_CONNECTIONS]);

    pub fn get(&self, direction: Direction) -> &Drawing {
        &self.0[direction.slot()]
    }

    pub fn top(&self) -> &Drawing {
        self.get(Direction::Top)
    }

    pub fn right(&self) -> &Drawing {
        self.get(Direction::Right)
    }

    pub fn bottom(&self) -> &Drawing {
        self.get(Direction::Bottom)
    }

    pub fn left(&self) -> &Drawing {
        self.get(Direction::Left)
    }

    /// True when all four entries are the empty sentinel.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Drawing::is_empty)
    }

    pub fn into_array(self) -> [Drawing; CARDINAL_CONNECTIONS] {
        self.0
    }
}
