//! Concurrent drawing session with event recording.

use mosaic_board::{BoardStats, CallerId, CanvasView, Drawing, SpiralIndex, CHUNK_COUNT};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::events::BoardEvent;
use crate::host::{Reservation, SharedBoard};

/// What a finished session looked like.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Board stats right after `finish`
    pub stats: BoardStats,
    /// Times a caller had to wait on the ceiling
    pub throttled: usize,
    /// Peak simultaneous outstanding reservations
    pub max_outstanding: usize,
    /// Cells drawn per caller, indexed by caller number
    pub drawn_per_caller: Vec<usize>,
}

/// Runs a set of callers against one shared board.
pub struct Simulation {
    config: SimulationConfig,
    host: SharedBoard,
}

impl Simulation {
    /// Create a new simulation with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        let host = SharedBoard::new(config.cells);
        Self { config, host }
    }

    /// The shared board the callers work on.
    pub fn host(&self) -> &SharedBoard {
        &self.host
    }

    /// Start the board, let every caller draw until the quota is used, finish.
    pub async fn run(&self) -> Result<SimulationReport> {
        info!(
            callers = self.config.callers,
            cells = self.config.cells,
            seed = self.config.seed,
            "Starting drawing session"
        );
        self.host.start().await?;

        let mut tasks = Vec::with_capacity(self.config.callers);
        for n in 0..self.config.callers {
            let host = self.host.clone();
            let caller = CallerId(n as u64);
            let seed = self.config.seed;
            let yield_before_draw = self.config.yield_before_draw;
            tasks.push(tokio::spawn(async move {
                run_caller(host, caller, seed, yield_before_draw).await
            }));
        }

        let mut drawn_per_caller = Vec::with_capacity(tasks.len());
        for task in tasks {
            drawn_per_caller.push(task.await??);
        }

        let stats = self.host.finish().await?;
        let throttled = self
            .host
            .events()
            .await
            .iter()
            .filter(|e| matches!(e, BoardEvent::Throttled { .. }))
            .count();

        let report = SimulationReport {
            stats,
            throttled,
            max_outstanding: self.host.max_outstanding().await,
            drawn_per_caller,
        };
        info!(
            drawn = report.stats.drawn,
            throttled = report.throttled,
            max_outstanding = report.max_outstanding,
            "Drawing session finished"
        );
        Ok(report)
    }

    /// Write the event timeline as pretty JSON, if a path is configured.
    pub async fn export_events(&self) -> Result<()> {
        if let Some(path) = &self.config.events_path {
            let events = self.host.events().await;
            let file = std::fs::File::create(path)?;
            serde_json::to_writer_pretty(file, &events)?;
            info!(path = %path.display(), events = events.len(), "Timeline written");
        }
        Ok(())
    }
}

/// One caller: reserve, look, draw, repeat until the board runs out of cells.
async fn run_caller(host: SharedBoard, caller: CallerId, seed: u64, yield_before_draw: bool) -> Result<usize> {
    let mut drawn = 0;

    loop {
        let index = match host.reserve_waiting(caller).await? {
            Reservation::Granted(index) => index,
            Reservation::Throttled | Reservation::Exhausted => break,
        };

        let view = host.canvas(caller).await?;
        if yield_before_draw {
            tokio::task::yield_now().await;
        }

        host.draw(caller, paint(seed, index, &view)).await?;
        drawn += 1;
    }

    debug!(%caller, drawn, "Caller done");
    Ok(drawn)
}

/// Deterministic drawing for a cell: seeded noise, first word tied to the
/// neighbors so each cell carries a trace of what it saw.
pub fn paint(seed: u64, index: SpiralIndex, view: &CanvasView) -> Drawing {
    let mut rng = StdRng::seed_from_u64(seed ^ index.value().rotate_left(32));
    let mut chunks = [0u64; CHUNK_COUNT];
    for chunk in chunks.iter_mut() {
        *chunk = rng.gen();
    }

    let seen = view
        .into_array()
        .iter()
        .fold(0u64, |acc, d| acc ^ d.chunks()[0]);
    // Never the empty sentinel: the low bit is always set
    chunks[0] = (chunks[0] ^ seen) | 1;

    Drawing::new(chunks)
}
