//! Meadow - the world state container
//!
//! The meadow owns the species catalog and every colony. It is an
//! explicitly constructed value handed to whatever drives the loop - no
//! process-wide singleton, no hidden global state - which also makes the
//! species rolls seedable for deterministic tests.

use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::{MeadowError, Result};
use crate::core::types::{ColonyId, SpeciesId, Tick};
use crate::entity::species::SpeciesCatalog;
use crate::simulation::colony::{Colony, TickOutcome};
use crate::simulation::events::SimulationEvent;

/// The top-level registry owning all species and all colonies
pub struct Meadow {
    config: SimulationConfig,
    species: SpeciesCatalog,
    /// Colonies in registration order - the order the world tick visits them
    colonies: Vec<Colony>,
    colony_index: AHashMap<ColonyId, usize>,
    next_colony_id: u32,
    pub current_tick: Tick,
}

impl Meadow {
    /// Build a meadow: validate config, roll the species catalog once
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let species = SpeciesCatalog::generate(&config, &mut rng);

        tracing::info!(
            species = species.len(),
            seed = config.seed,
            "meadow initialized"
        );

        Ok(Self {
            config,
            species,
            colonies: Vec::new(),
            colony_index: AHashMap::new(),
            next_colony_id: 1,
            current_tick: 0,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    /// Found a colony on a catalog species and register it
    pub fn create_colony(
        &mut self,
        name: impl Into<String>,
        species: SpeciesId,
    ) -> Result<ColonyId> {
        if self.species.get(species).is_none() {
            return Err(MeadowError::UnknownSpecies(species));
        }

        let id = ColonyId(self.next_colony_id);
        self.next_colony_id += 1;

        let name = name.into();
        tracing::debug!(colony = %name, ?species, "colony founded");

        self.colony_index.insert(id, self.colonies.len());
        self.colonies
            .push(Colony::new(id, name, species, &self.config));

        Ok(id)
    }

    pub fn colony(&self, id: ColonyId) -> Result<&Colony> {
        self.colony_index
            .get(&id)
            .and_then(|&idx| self.colonies.get(idx))
            .ok_or(MeadowError::UnknownColony(id))
    }

    pub fn colony_mut(&mut self, id: ColonyId) -> Result<&mut Colony> {
        let idx = *self
            .colony_index
            .get(&id)
            .ok_or(MeadowError::UnknownColony(id))?;
        self.colonies
            .get_mut(idx)
            .ok_or(MeadowError::UnknownColony(id))
    }

    pub fn colonies(&self) -> &[Colony] {
        &self.colonies
    }

    pub fn active_colony_count(&self) -> usize {
        self.colonies.iter().filter(|c| c.is_active()).count()
    }

    /// Last colony standing: true once at most one colony remains active
    pub fn simulation_complete(&self) -> bool {
        self.active_colony_count() <= 1
    }

    /// Advance every colony by one tick, in registration order
    ///
    /// Returns the events produced this tick for the caller's log.
    pub fn tick(&mut self) -> Vec<SimulationEvent> {
        self.current_tick += 1;

        let config = &self.config;
        let mut events = Vec::new();

        for colony in self.colonies.iter_mut() {
            if let TickOutcome::Exhausted { ants_processed } = colony.tick(config) {
                events.push(SimulationEvent::ColonyStarved {
                    colony: colony.id,
                    ants_processed,
                });
            }
        }

        events
    }
}
