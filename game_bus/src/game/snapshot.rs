//! Read-only, serializable views of a running game.

use serde::Serialize;

use super::{Game, GamePhase};
use crate::entities::{Entity, EntityId, Faction, Status};

/// State of one entity at the moment of capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySnapshot {
    pub id: EntityId,
    pub name: String,
    pub faction: Faction,
    pub status: Status,
    pub components: Vec<&'static str>,
    pub hit_points: Option<i32>,
    pub pending_messages: usize,
}

impl EntitySnapshot {
    pub fn capture(entity: &Entity) -> Self {
        Self {
            id: entity.id(),
            name: entity.name().to_string(),
            faction: entity.faction(),
            status: entity.status(),
            components: entity.component_names(),
            hit_points: entity.hit_points(),
            pending_messages: entity.pending_messages().count(),
        }
    }
}

/// State of the whole roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub ticks_elapsed: u64,
    pub started: bool,
    pub entities: Vec<EntitySnapshot>,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        Self {
            ticks_elapsed: game.ticks_elapsed(),
            started: game.phase() != GamePhase::NotStarted,
            entities: game.entities().iter().map(EntitySnapshot::capture).collect(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
