//! Entity types: ants, species, rooms

pub mod ant;
pub mod room;
pub mod species;

pub use ant::{Ant, AntRole};
pub use room::{Room, RoomPurpose};
pub use species::{Species, SpeciesCatalog};
