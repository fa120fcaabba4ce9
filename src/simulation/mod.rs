//! The tick-driven simulation
//!
//! Colonies advance one at a time inside the meadow's tick; each colony
//! walks its ants in insertion order, acting and then feeding them until
//! the food supply fails. The runner wires the canonical scenario together
//! and produces a summarized output.

pub mod colony;
pub mod events;
pub mod output;
pub mod runner;
pub mod world;

pub use colony::{Colony, FoodStore, TickOutcome};
pub use events::{Event, EventLog, SimulationEvent};
pub use output::{MeadowSnapshot, SimulationOutput, SimulationStats};
pub use runner::{populate, simulate};
pub use world::Meadow;
