//! Error types for the simulation host.

use mosaic_board::BoardError;
use thiserror::Error;

/// Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A board call failed with a non-retryable error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Invalid configuration value
    #[error("Invalid config: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A caller task panicked or was cancelled
    #[error("Caller task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
