//! Error types for board operations.

use mosaic_topology::SpiralIndex;
use thiserror::Error;

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors a board operation can reject with.
///
/// Every check runs before any state is touched, so a returned error means
/// the board is exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Operation requires an idle board
    #[error("Board must be idle")]
    NotIdle,

    /// Operation requires a started board
    #[error("Board must be started")]
    NotStarted,

    /// Every slot the frontier ring allows is already reserved
    #[error("Max concurrency reached ({outstanding}/{capacity} outstanding)")]
    MaxConcurrencyReached { outstanding: usize, capacity: usize },

    /// Drawing was the all-zero sentinel
    #[error("Drawing shouldn't be empty")]
    EmptyDrawing,

    /// Caller holds no active reservation
    #[error("Caller holds no reservation")]
    NoReservation,

    /// Caller does not hold a reservation on this cell
    #[error("Cell {index} is not reserved by caller")]
    NotReserved { index: SpiralIndex },

    /// Cell already carries a drawing
    #[error("Cell {index} is already drawn")]
    AlreadyDrawn { index: SpiralIndex },

    /// Caller still holds an undrawn reservation
    #[error("Caller already holds reservation on cell {index}")]
    AlreadyReserved { index: SpiralIndex },
}

impl BoardError {
    /// Whether retrying the same call later can succeed without changing input.
    ///
    /// Only the concurrency ceiling clears on its own, once other callers draw.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BoardError::MaxConcurrencyReached { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_messages() {
        assert_eq!(BoardError::NotIdle.to_string(), "Board must be idle");
        assert_eq!(BoardError::NotStarted.to_string(), "Board must be started");
        assert_eq!(BoardError::EmptyDrawing.to_string(), "Drawing shouldn't be empty");
    }

    #[test]
    fn only_capacity_is_retryable() {
        let full = BoardError::MaxConcurrencyReached { outstanding: 4, capacity: 4 };
        assert!(full.is_retryable());
        assert!(full.to_string().starts_with("Max concurrency reached"));

        assert!(!BoardError::NotStarted.is_retryable());
        assert!(!BoardError::EmptyDrawing.is_retryable());
        assert!(!BoardError::AlreadyDrawn { index: SpiralIndex(3) }.is_retryable());
    }
}
