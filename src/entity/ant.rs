//! Ants and their per-tick behavior
//!
//! An ant is a small stateful value: a role, an energy level in
//! `[0, energy_max]`, and a fixed per-tick food cost. Behavior is a single
//! match over the closed role set rather than an inheritance chain.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{AntId, SpeciesId};

/// The three ant roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntRole {
    Drone,
    Warrior,
    Queen,
}

/// A colony member with energy and a food cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ant {
    pub id: AntId,
    pub name: String,
    pub species: SpeciesId,
    pub role: AntRole,
    /// Current energy, always within `[0, energy_max]`
    pub energy: u32,
    /// Food units consumed per tick, fixed at construction
    pub food_cost: u32,
}

impl Ant {
    /// Create an ant at full energy
    pub fn new(
        name: impl Into<String>,
        species: SpeciesId,
        role: AntRole,
        config: &SimulationConfig,
    ) -> Self {
        Self {
            id: AntId::new(),
            name: name.into(),
            species,
            role,
            energy: config.energy_max,
            food_cost: config.food_cost,
        }
    }

    pub fn drone(name: impl Into<String>, species: SpeciesId, config: &SimulationConfig) -> Self {
        Self::new(name, species, AntRole::Drone, config)
    }

    pub fn warrior(name: impl Into<String>, species: SpeciesId, config: &SimulationConfig) -> Self {
        Self::new(name, species, AntRole::Warrior, config)
    }

    pub fn queen(name: impl Into<String>, species: SpeciesId, config: &SimulationConfig) -> Self {
        Self::new(name, species, AntRole::Queen, config)
    }

    /// Role-dependent per-tick behavior; mutates energy only
    ///
    /// Drones and warriors rest when tired and work otherwise. A tired
    /// queen does nothing at all - she never rests. That asymmetry is a
    /// preserved contract, not an oversight to fix here.
    pub fn act(&mut self, config: &SimulationConfig) {
        match self.role {
            AntRole::Drone | AntRole::Warrior => {
                if self.needs_rest(config) {
                    self.rest(config);
                } else {
                    self.work(config);
                }
            }
            AntRole::Queen => {
                if !self.needs_rest(config) {
                    self.work(config);
                }
            }
        }
    }

    /// Recover energy, clamped at `energy_max`
    pub fn rest(&mut self, config: &SimulationConfig) {
        self.energy = (self.energy + config.rest_recovery).min(config.energy_max);
    }

    /// Spend energy, floored at 0
    pub fn work(&mut self, config: &SimulationConfig) {
        self.energy = self.energy.saturating_sub(config.work_cost);
    }

    /// True iff energy is strictly below the rest threshold
    pub fn needs_rest(&self, config: &SimulationConfig) -> bool {
        self.energy < config.rest_threshold
    }
}
