//! The entity aggregate.

use super::component::ComponentSlot;
use super::{Component, ComponentContext, EntityId, EntityRef, Faction, Status};
use crate::messages::{Message, Report};

/// A named, faction-tagged actor made of components.
///
/// Name and faction are fixed at construction. Components can only be added while
/// the caller still owns the entity; once handed to a [`crate::Game`] the roster is
/// only reachable through shared references.
#[derive(Debug)]
pub struct Entity {
    identity: EntityRef,
    status: Status,
    slots: Vec<ComponentSlot>,
}

impl Entity {
    /// Create an entity with no components.
    pub fn new(name: impl Into<String>, faction: Faction) -> Self {
        let name: String = name.into();
        Self {
            identity: EntityRef::new(EntityId::new(), name, faction),
            status: Status::Able,
            slots: Vec::new(),
        }
    }

    /// Append a component, keeping insertion order.
    pub fn add_component(&mut self, component: Box<dyn Component>) {
        self.slots.push(ComponentSlot::new(component));
    }

    /// Builder form of [`Entity::add_component`].
    pub fn with_component(mut self, component: impl Component + 'static) -> Self {
        self.add_component(Box::new(component));
        self
    }

    pub fn id(&self) -> EntityId {
        self.identity.id()
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn faction(&self) -> Faction {
        self.identity.faction()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_able(&self) -> bool {
        self.status == Status::Able
    }

    /// Identity reference suitable for a message subject.
    pub fn identity(&self) -> &EntityRef {
        &self.identity
    }

    /// Names of the owned components in insertion order.
    pub fn component_names(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.component.name()).collect()
    }

    /// Hit points of the first component carrying the vitality capability.
    pub fn hit_points(&self) -> Option<i32> {
        self.slots
            .iter()
            .find_map(|slot| slot.component.vitality())
            .map(|vitality| vitality.hit_points())
    }

    /// Messages staged by components and not yet collected.
    pub fn pending_messages(&self) -> impl Iterator<Item = &Message> {
        self.slots.iter().flat_map(|slot| slot.outbox.iter())
    }

    /// Drain every component's queue in insertion order.
    ///
    /// Queues are always drained; while the entity is disabled the drained messages
    /// are discarded instead of returned.
    pub fn tick(&mut self) -> Vec<Message> {
        let mut outgoing = Vec::new();
        for slot in &mut self.slots {
            outgoing.extend(slot.tick());
        }

        if self.status == Status::Disabled {
            if !outgoing.is_empty() {
                tracing::debug!(
                    entity = %self.identity,
                    dropped = outgoing.len(),
                    "suppressed emissions from disabled entity"
                );
            }
            return Vec::new();
        }

        outgoing
    }

    /// Forward a message to every component, if it is addressed to this entity.
    ///
    /// Status does not gate reception.
    pub fn receive(&mut self, message: &Message, reports: &mut Vec<Report>) {
        if !message.is_addressed_to(self.id()) {
            return;
        }

        for index in 0..self.slots.len() {
            let (before, rest) = self.slots.split_at_mut(index);
            let Some((slot, after)) = rest.split_first_mut() else {
                break;
            };
            let mut ctx = ComponentContext::new(
                &self.identity,
                &mut self.status,
                &mut slot.outbox,
                before,
                after,
                reports,
            );
            slot.component.receive(message, &mut ctx);
        }
    }
}
