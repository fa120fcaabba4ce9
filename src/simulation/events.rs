//! Events and run history logging

use serde::{Deserialize, Serialize};

use crate::core::types::{AntId, ColonyId, SpeciesId, Tick};
use crate::entity::ant::AntRole;

/// A recorded event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub tick: Tick,
    pub kind: SimulationEvent,
}

/// Everything worth remembering about a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEvent {
    /// A colony was founded on a species
    ColonyFounded { colony: ColonyId, species: SpeciesId },
    /// A queen took (or took over) a colony's throne
    QueenInstalled { colony: ColonyId, ant: AntId },
    /// An ant joined a colony's general list
    AntJoined {
        colony: ColonyId,
        ant: AntId,
        role: AntRole,
    },
    /// A colony's food supply failed mid-tick and it went dark
    ColonyStarved {
        colony: ColonyId,
        ants_processed: usize,
    },
    /// The outer loop stopped
    SimulationEnded,
}

impl SimulationEvent {
    /// The colony this event concerns, if any
    pub fn colony(&self) -> Option<ColonyId> {
        match self {
            Self::ColonyFounded { colony, .. }
            | Self::QueenInstalled { colony, .. }
            | Self::AntJoined { colony, .. }
            | Self::ColonyStarved { colony, .. } => Some(*colony),
            Self::SimulationEnded => None,
        }
    }
}

/// The complete run history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: SimulationEvent, tick: Tick) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(Event { id, tick, kind });

        id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_for_colony(&self, colony: ColonyId) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.kind.colony() == Some(colony))
    }
}
