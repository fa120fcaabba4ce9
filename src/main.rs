//! Meadow Sim - entry point
//!
//! Builds the meadow, founds the canonical colonies, and runs the visible
//! tick loop until at most one colony remains active or the tick cap is
//! hit. Takes no arguments; diagnostic logging goes to stderr under
//! `RUST_LOG` so stdout carries nothing but the tick report.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use meadow_sim::core::config::SimulationConfig;
use meadow_sim::core::error::Result;
use meadow_sim::simulation::events::EventLog;
use meadow_sim::simulation::runner::populate;
use meadow_sim::simulation::world::Meadow;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Fresh species rolls every run; tests pin the seed instead.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let config = SimulationConfig {
        seed,
        ..SimulationConfig::default()
    };

    tracing::info!(seed, "meadow sim starting");

    let mut meadow = Meadow::new(config)?;
    let mut history = EventLog::new();
    populate(&mut meadow, &mut history)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let max_ticks = meadow.config().max_ticks;
    let mut ticks: u64 = 0;

    while !meadow.simulation_complete() && ticks < max_ticks {
        let events = meadow.tick();
        ticks += 1;
        writeln!(out, "Tick {} completed.", ticks)?;
        for kind in events {
            tracing::info!(tick = ticks, ?kind, "colony event");
            history.record(kind, ticks);
        }
    }

    writeln!(out, "Simulation ended after {} ticks.", ticks)?;

    tracing::info!(
        ticks,
        active_colonies = meadow.active_colony_count(),
        events = history.len(),
        "simulation finished"
    );

    Ok(())
}
