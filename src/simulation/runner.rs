//! Scenario setup and the headless simulation entry point

use std::time::Instant;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{ColonyId, SpeciesId};
use crate::entity::ant::Ant;
use crate::entity::room::{Room, RoomPurpose};
use crate::simulation::events::{EventLog, SimulationEvent};
use crate::simulation::output::SimulationOutput;
use crate::simulation::world::Meadow;

/// Found the canonical scenario: `colony_count` colonies, each with a queen
/// installed first and a single worker
///
/// Colonies alternate between a drone founder and a warrior founder and are
/// assigned catalog species round-robin. Founders are also filed into the
/// colony's rooms; room membership is bookkeeping the tick loop never reads.
pub fn populate(meadow: &mut Meadow, history: &mut EventLog) -> Result<Vec<ColonyId>> {
    let config = meadow.config().clone();
    let mut founded = Vec::with_capacity(config.colony_count as usize);

    for i in 0..config.colony_count {
        let n = i + 1;
        let species = SpeciesId(i % config.species_count);
        let colony_id = meadow.create_colony(format!("Colony{}", n), species)?;
        history.record(
            SimulationEvent::ColonyFounded {
                colony: colony_id,
                species,
            },
            meadow.current_tick,
        );

        let queen = Ant::queen(format!("Queen{}", n), species, &config);
        let worker = if i % 2 == 0 {
            Ant::drone(format!("Drone{}", n), species, &config)
        } else {
            Ant::warrior(format!("Warrior{}", n), species, &config)
        };
        let queen_id = queen.id;
        let worker_id = worker.id;
        let worker_role = worker.role;

        let mut nursery = Room::new(format!("Nursery{}", n), RoomPurpose::Spawning, 8);
        nursery.add_ant(queen_id);
        let mut quarters = Room::new(format!("Quarters{}", n), RoomPurpose::Resting, 8);
        quarters.add_ant(worker_id);
        let granary = Room::new(format!("Granary{}", n), RoomPurpose::Storage, 4);

        let colony = meadow.colony_mut(colony_id)?;
        colony.add_room(nursery);
        colony.add_room(quarters);
        colony.add_room(granary);

        // Queen before worker, so the tick walks her first.
        colony.set_queen(queen);
        history.record(
            SimulationEvent::QueenInstalled {
                colony: colony_id,
                ant: queen_id,
            },
            meadow.current_tick,
        );

        let colony = meadow.colony_mut(colony_id)?;
        colony.add_ant(worker);
        history.record(
            SimulationEvent::AntJoined {
                colony: colony_id,
                ant: worker_id,
                role: worker_role,
            },
            meadow.current_tick,
        );

        founded.push(colony_id);
    }

    tracing::info!(colonies = founded.len(), "scenario populated");

    Ok(founded)
}

/// Run a complete headless simulation
///
/// Builds a meadow from config, populates the canonical scenario, then
/// loops until at most one colony remains active or the tick cap is hit.
pub fn simulate(config: SimulationConfig) -> Result<SimulationOutput> {
    let start = Instant::now();

    let mut meadow = Meadow::new(config)?;
    let mut history = EventLog::new();
    populate(&mut meadow, &mut history)?;

    let max_ticks = meadow.config().max_ticks;
    let mut ticks: u64 = 0;

    while !meadow.simulation_complete() && ticks < max_ticks {
        let events = meadow.tick();
        ticks += 1;
        for kind in events {
            history.record(kind, ticks);
        }
    }

    history.record(SimulationEvent::SimulationEnded, ticks);

    Ok(SimulationOutput::new(&meadow, history, ticks, start.elapsed()))
}
