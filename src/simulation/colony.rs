//! Colonies (ant farms) and their per-tick update
//!
//! A colony owns its ants and its food supply. One colony tick walks the
//! ants in insertion order: each acts, then eats. The first ant the supply
//! cannot cover deactivates the colony immediately and for good - ants later
//! in the list are skipped that tick and every tick after.

use serde::{Deserialize, Serialize};

use crate::core::config::SimulationConfig;
use crate::core::types::{AntId, ColonyId, SpeciesId};
use crate::entity::ant::Ant;
use crate::entity::room::Room;

/// A colony's food counter
///
/// Consumption is all-or-nothing: an ant either gets its full cost or the
/// supply is left untouched and the caller learns of the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodStore {
    remaining: u32,
}

impl FoodStore {
    pub fn new(amount: u32) -> Self {
        Self { remaining: amount }
    }

    /// Subtract `amount` iff the supply covers it
    ///
    /// Returns false and leaves the supply unchanged otherwise. This boolean
    /// is the only failure signal in the simulation - never an error.
    pub fn try_consume(&mut self, amount: u32) -> bool {
        if self.remaining >= amount {
            self.remaining -= amount;
            true
        } else {
            false
        }
    }

    pub fn available(&self) -> u32 {
        self.remaining
    }
}

/// What a single colony tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Inactive or queenless; nothing was touched
    Dormant,
    /// Every ant acted and fed
    Advanced { ants_processed: usize },
    /// An ant's consumption failed; the colony is now permanently inactive
    ///
    /// `ants_processed` counts the ants that fed successfully before the
    /// failure. The failing ant did act (its energy change stands) but went
    /// unfed, and the rest of the list was skipped.
    Exhausted { ants_processed: usize },
}

/// A resource-bounded group of ants managed around a single queen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colony {
    pub id: ColonyId,
    pub name: String,
    pub species: SpeciesId,
    pub food: FoodStore,
    queen: Option<AntId>,
    ants: Vec<Ant>,
    rooms: Vec<Room>,
    active: bool,
}

impl Colony {
    pub fn new(
        id: ColonyId,
        name: impl Into<String>,
        species: SpeciesId,
        config: &SimulationConfig,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            food: FoodStore::new(config.starting_food),
            queen: None,
            ants: Vec::new(),
            rooms: Vec::new(),
            active: true,
        }
    }

    /// Append a room, unconditionally
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Install a queen
    ///
    /// Stores her id as the queen reference and appends her to the general
    /// ant list. Installing a second queen replaces the reference but leaves
    /// the prior queen in the list, still acting and eating every tick -
    /// a preserved contract.
    pub fn set_queen(&mut self, queen: Ant) {
        self.queen = Some(queen.id);
        self.ants.push(queen);
    }

    /// Append an ant, unconditionally - no capacity check at colony level
    pub fn add_ant(&mut self, ant: Ant) {
        self.ants.push(ant);
    }

    /// Advance this colony by one tick
    ///
    /// No-op while inactive or queenless. Otherwise each ant acts and then
    /// eats, in insertion order, until the first failed consumption flips
    /// the colony inactive and aborts the pass.
    pub fn tick(&mut self, config: &SimulationConfig) -> TickOutcome {
        if !self.active || self.queen.is_none() {
            return TickOutcome::Dormant;
        }

        for (processed, ant) in self.ants.iter_mut().enumerate() {
            ant.act(config);

            if !self.food.try_consume(ant.food_cost) {
                self.active = false;
                tracing::debug!(
                    colony = %self.name,
                    ant = %ant.name,
                    ants_processed = processed,
                    "food exhausted, colony deactivated"
                );
                return TickOutcome::Exhausted {
                    ants_processed: processed,
                };
            }
        }

        TickOutcome::Advanced {
            ants_processed: self.ants.len(),
        }
    }

    /// Active and led by a queen
    pub fn is_active(&self) -> bool {
        self.active && self.queen.is_some()
    }

    pub fn queen(&self) -> Option<AntId> {
        self.queen
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Mutable access to the ants for stat adjustments
    ///
    /// A slice, so list membership stays under colony control.
    pub fn ants_mut(&mut self) -> &mut [Ant] {
        &mut self.ants
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}
