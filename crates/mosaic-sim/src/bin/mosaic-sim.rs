//! Mosaic drawing session runner
//!
//! Usage:
//!   mosaic-sim [config.json]
//!
//! Without a config file, settings come from `MOSAIC_*` environment variables.

use mosaic_sim::{Simulation, SimulationConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mosaic_sim=info,mosaic_board=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::from_env()?,
    };

    println!("Mosaic Board Session");
    println!("====================");
    println!("  Callers: {}", config.callers);
    println!("  Cells:   {}", config.cells);
    println!();

    let sim = Simulation::new(config);
    let report = sim.run().await?;
    sim.export_events().await?;
    sim.host().log_summary().await;

    println!("Session complete:");
    println!("  Drawn:           {}", report.stats.drawn);
    println!("  Frontier ring:   {}", report.stats.frontier_ring);
    println!("  Throttled:       {}", report.throttled);
    println!("  Max outstanding: {}", report.max_outstanding);
    println!();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
