//! Simulation configuration with documented constants
//!
//! All tuning numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use crate::core::error::{MeadowError, Result};

/// Configuration for the simulation
///
/// The defaults reproduce the canonical two-colony scenario: each colony
/// holds a queen and one worker, so a colony burns 20 food per tick and a
/// 1000-unit supply carries it through 50 full ticks before the 51st tick
/// starves it.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === ENERGY SYSTEM ===
    /// Upper bound for ant energy
    ///
    /// Ants spawn at this value and `rest` can never push energy past it.
    pub energy_max: u32,

    /// Energy level below which an ant needs rest
    ///
    /// Strictly below: an ant at exactly the threshold keeps working.
    pub rest_threshold: u32,

    /// Energy regained by one `rest`, clamped at `energy_max`
    pub rest_recovery: u32,

    /// Energy spent by one `work`, floored at 0
    pub work_cost: u32,

    // === FOOD SYSTEM ===
    /// Food units one ant consumes per tick
    ///
    /// The first ant whose consumption cannot be covered deactivates its
    /// colony for the rest of the run.
    pub food_cost: u32,

    /// Food supply each colony starts with
    pub starting_food: u32,

    // === SPECIES CATALOG ===
    /// Number of species generated at meadow construction
    pub species_count: u32,

    /// Lower bound (inclusive) for each rolled species bonus
    pub species_bonus_min: u32,

    /// Upper bound (inclusive) for each rolled species bonus
    pub species_bonus_max: u32,

    // === SCENARIO ===
    /// Colonies founded by the default scenario
    ///
    /// The simulation completes once at most one colony remains active, so
    /// anything below 2 ends before the first tick.
    pub colony_count: u32,

    // === TERMINATION ===
    /// Hard cap on executed ticks
    ///
    /// The outer loop stops here even if colonies would otherwise stay
    /// mutually active forever.
    pub max_ticks: u64,

    /// Seed for the species stat rolls
    ///
    /// The driver binary seeds from wall-clock time at startup; tests pin
    /// this for deterministic catalogs.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            // Energy (spawn full, tire by 10, recover by 20)
            energy_max: 100,
            rest_threshold: 30,
            rest_recovery: 20,
            work_cost: 10,

            // Food
            food_cost: 10,
            starting_food: 1000,

            // Species catalog (12 rosters, bonuses rolled in [5, 9])
            species_count: 12,
            species_bonus_min: 5,
            species_bonus_max: 9,

            // Scenario
            colony_count: 2,

            // Termination
            max_ticks: 1000,
            seed: 12345,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.rest_threshold > self.energy_max {
            return Err(MeadowError::InvalidConfig(format!(
                "rest_threshold ({}) must be <= energy_max ({})",
                self.rest_threshold, self.energy_max
            )));
        }

        if self.species_bonus_min > self.species_bonus_max {
            return Err(MeadowError::InvalidConfig(format!(
                "species_bonus_min ({}) must be <= species_bonus_max ({})",
                self.species_bonus_min, self.species_bonus_max
            )));
        }

        if self.species_count == 0 {
            return Err(MeadowError::InvalidConfig(
                "species_count must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
