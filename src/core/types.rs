//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for ants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AntId(pub Uuid);

impl AntId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AntId {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation tick counter (discrete time unit)
pub type Tick = u64;

/// Unique identifier for colonies, assigned in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColonyId(pub u32);

impl ColonyId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Index of a species in the meadow's catalog
///
/// Species are owned by the catalog for the process lifetime; everything
/// else refers to them by id rather than by shared borrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

impl SpeciesId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}
