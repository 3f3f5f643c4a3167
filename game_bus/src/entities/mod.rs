//! Entity definitions: identity, faction, status and the component aggregate.

mod component;
mod entity;

pub use component::*;
pub use entity::*;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier for every entity on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side an entity fights for. Hostile behaviors only pick targets of the other faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Good,
    Evil,
}

impl Faction {
    /// Whether `other` belongs to a different faction.
    pub fn is_hostile_to(self, other: Faction) -> bool {
        self != other
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Good => write!(f, "good"),
            Faction::Evil => write!(f, "evil"),
        }
    }
}

/// Activity status of an entity.
///
/// A disabled entity keeps perceiving messages but its emissions are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Able,
    Disabled,
}

/// Cheap, cloneable reference to an entity's immutable identity.
///
/// Messages carry one of these as their subject, so a component can inspect who
/// a message is about without reaching into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    id: EntityId,
    name: Arc<str>,
    faction: Faction,
}

impl EntityRef {
    pub fn new(id: EntityId, name: impl Into<Arc<str>>, faction: Faction) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faction_hostility() {
        assert!(Faction::Good.is_hostile_to(Faction::Evil));
        assert!(Faction::Evil.is_hostile_to(Faction::Good));
        assert!(!Faction::Good.is_hostile_to(Faction::Good));
    }

    #[test]
    fn test_status_defaults_to_able() {
        assert_eq!(Status::default(), Status::Able);
    }

    #[test]
    fn test_entity_ref_identity() {
        let id = EntityId::new();
        let who = EntityRef::new(id, "link", Faction::Good);
        assert_eq!(who.id(), id);
        assert_eq!(who.name(), "link");
        assert_eq!(who.to_string(), "link");
        assert_eq!(who.clone(), who);
    }
}
