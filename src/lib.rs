//! Meadow Sim - turn-based ant colony simulation
//!
//! Colonies of simple stateful ants consume a shared food supply and act
//! once per tick until their food runs out or at most one colony remains
//! active. The whole program is a single synchronous tick loop over a
//! shallow entity hierarchy: ants inside colonies inside one meadow.

pub mod core;
pub mod entity;
pub mod simulation;

pub use crate::core::config::SimulationConfig;
pub use crate::core::error::{MeadowError, Result};
pub use crate::core::types::{AntId, ColonyId, SpeciesId, Tick};
pub use crate::entity::ant::{Ant, AntRole};
pub use crate::entity::room::{Room, RoomPurpose};
pub use crate::entity::species::{Species, SpeciesCatalog};
pub use crate::simulation::colony::{Colony, FoodStore, TickOutcome};
pub use crate::simulation::events::{Event, EventLog, SimulationEvent};
pub use crate::simulation::output::{MeadowSnapshot, SimulationOutput, SimulationStats};
pub use crate::simulation::runner::{populate, simulate};
pub use crate::simulation::world::Meadow;
