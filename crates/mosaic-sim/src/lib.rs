//! Mosaic Board Simulation
//!
//! Drives many concurrent callers against one shared board and records a
//! replayable timeline.
//!
//! # Architecture
//!
//! - **Host**: one async mutex around the board; each call is a critical section
//! - **Simulation**: one task per caller looping reserve → view → draw
//! - **Events**: tagged JSON timeline, replayable into snapshots
//!
//! # Usage
//!
//! ```ignore
//! let sim = Simulation::new(SimulationConfig::default());
//! let report = sim.run().await?;
//! sim.export_events().await?;
//! ```

mod config;
mod error;
mod events;
mod host;
mod simulation;

pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use events::{BoardEvent, TimelineSnapshot};
pub use host::{Reservation, SharedBoard};
pub use simulation::{paint, Simulation, SimulationReport};
