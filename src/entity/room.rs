//! Rooms: capacity-bounded membership bookkeeping
//!
//! Rooms file ants by purpose but are never consulted by the tick loop;
//! occupant lists hold non-owning ids and stay disjoint from the colony's
//! own ant list.

use serde::{Deserialize, Serialize};

use crate::core::types::AntId;

/// What a room is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomPurpose {
    Spawning,
    Resting,
    Storage,
    Battle,
}

/// A capacity-bounded container of ants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub purpose: RoomPurpose,
    pub capacity: usize,
    occupants: Vec<AntId>,
}

impl Room {
    pub fn new(name: impl Into<String>, purpose: RoomPurpose, capacity: usize) -> Self {
        Self {
            name: name.into(),
            purpose,
            capacity,
            occupants: Vec::new(),
        }
    }

    pub fn can_accept_more(&self) -> bool {
        self.occupants.len() < self.capacity
    }

    /// File an ant into this room
    ///
    /// Silently ignored once the room is full - no error, no queuing.
    pub fn add_ant(&mut self, ant: AntId) {
        if self.can_accept_more() {
            self.occupants.push(ant);
        }
    }

    pub fn occupants(&self) -> &[AntId] {
        &self.occupants
    }
}
