//! Simulation output and serialization

use std::time::Duration;

use serde::Serialize;

use crate::core::error::Result;
use crate::core::types::Tick;
use crate::entity::species::SpeciesCatalog;
use crate::simulation::colony::Colony;
use crate::simulation::events::{EventLog, SimulationEvent};
use crate::simulation::world::Meadow;

/// Serializable snapshot of the final world state
#[derive(Debug, Clone, Serialize)]
pub struct MeadowSnapshot {
    pub tick: Tick,
    pub species: SpeciesCatalog,
    pub colonies: Vec<Colony>,
}

impl MeadowSnapshot {
    pub fn capture(meadow: &Meadow) -> Self {
        Self {
            tick: meadow.current_tick,
            species: meadow.species().clone(),
            colonies: meadow.colonies().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationStats {
    pub ticks_executed: u64,
    pub max_ticks: u64,
    pub colonies_at_start: u32,
    pub colonies_active_at_end: u32,
    pub colonies_starved: u32,
    pub total_events: u32,
    pub simulation_time_ms: u64,
}

/// Complete simulation output
#[derive(Debug, Clone, Serialize)]
pub struct SimulationOutput {
    pub final_meadow: MeadowSnapshot,
    pub history: EventLog,
    pub statistics: SimulationStats,
}

impl SimulationOutput {
    pub fn new(meadow: &Meadow, history: EventLog, ticks_executed: u64, elapsed: Duration) -> Self {
        let colonies_at_start = history
            .events
            .iter()
            .filter(|e| matches!(e.kind, SimulationEvent::ColonyFounded { .. }))
            .count() as u32;

        let colonies_starved = history
            .events
            .iter()
            .filter(|e| matches!(e.kind, SimulationEvent::ColonyStarved { .. }))
            .count() as u32;

        let total_events = history.len() as u32;

        Self {
            final_meadow: MeadowSnapshot::capture(meadow),
            statistics: SimulationStats {
                ticks_executed,
                max_ticks: meadow.config().max_ticks,
                colonies_at_start,
                colonies_active_at_end: meadow.active_colony_count() as u32,
                colonies_starved,
                total_events,
                simulation_time_ms: elapsed.as_millis() as u64,
            },
            history,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn summary(&self) -> String {
        format!(
            "Simulated {} ticks in {}ms\n{} events, {} colonies starved, {} still active",
            self.statistics.ticks_executed,
            self.statistics.simulation_time_ms,
            self.statistics.total_events,
            self.statistics.colonies_starved,
            self.statistics.colonies_active_at_end,
        )
    }
}
