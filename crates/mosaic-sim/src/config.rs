//! Simulation configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// Configuration for a simulated drawing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for deterministic drawings
    pub seed: u64,
    /// Number of concurrent callers
    pub callers: usize,
    /// Cells to fill before the board is finished
    pub cells: u64,
    /// Yield between viewing the canvas and drawing, so other callers interleave
    pub yield_before_draw: bool,
    /// Where to write the event timeline as JSON
    pub events_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            callers: 8,
            cells: 61,
            yield_before_draw: true,
            events_path: None,
        }
    }
}

impl SimulationConfig {
    /// Create config from `MOSAIC_*` environment variables, defaulting the rest.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Self {
            seed: env_or("MOSAIC_SEED", defaults.seed)?,
            callers: env_or("MOSAIC_CALLERS", defaults.callers)?,
            cells: env_or("MOSAIC_CELLS", defaults.cells)?,
            yield_before_draw: env_or("MOSAIC_YIELD_BEFORE_DRAW", defaults.yield_before_draw)?,
            events_path: std::env::var("MOSAIC_EVENTS_PATH").ok().map(PathBuf::from),
        }
        .validated()
    }

    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.callers == 0 {
            return Err(SimError::Config("callers must be at least 1".into()));
        }
        Ok(self)
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SimError::Config(format!("{key}={raw:?} is not valid"))),
        Err(_) => Ok(default),
    }
}
