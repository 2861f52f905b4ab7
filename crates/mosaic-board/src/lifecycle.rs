//! Board lifecycle: Idle → Started → Finished.
//!
//! Transitions only move forward. Finished is terminal.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Lifecycle state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardState {
    /// Constructed, not accepting callers yet
    #[default]
    Idle,
    /// Accepting reservations, drawings and view requests
    Started,
    /// Closed for good
    Finished,
}

impl BoardState {
    /// Idle → Started.
    pub fn start(&mut self) -> Result<()> {
        match self {
            BoardState::Idle => {
                *self = BoardState::Started;
                Ok(())
            }
            _ => Err(BoardError::NotIdle),
        }
    }

    /// Started → Finished.
    pub fn finish(&mut self) -> Result<()> {
        self.require_started()?;
        *self = BoardState::Finished;
        Ok(())
    }

    /// Gate for every caller-facing operation.
    pub fn require_started(&self) -> Result<()> {
        if self.is_started() {
            Ok(())
        } else {
            Err(BoardError::NotStarted)
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self, BoardState::Started)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, BoardState::Finished)
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardState::Idle => "idle",
            BoardState::Started => "started",
            BoardState::Finished => "finished",
        };
        f.write_str(name)
    }
}
