//! Drive a single component without building an entity or a game.
//!
//! ```
//! use game_bus::testing::ComponentHarness;
//! use game_bus::{Component, ComponentContext, Faction, Message, MessageKind, Recipient};
//!
//! #[derive(Debug)]
//! struct Echo;
//!
//! impl Component for Echo {
//!     fn name(&self) -> &'static str {
//!         "echo"
//!     }
//!
//!     fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
//!         ctx.emit(message.kind(), Recipient::Targeted(message.who().id()));
//!     }
//! }
//!
//! let mut harness = ComponentHarness::new("link", Faction::Good, Echo);
//! let presence = Message::broadcast(MessageKind::Presence, harness.owner().clone());
//! harness.receive(&presence);
//!
//! assert_eq!(harness.drain().len(), 1);
//! ```

use std::sync::Arc;

use crate::entities::{ComponentContext, EntityId, EntityRef, Faction, Status};
use crate::messages::{Message, Report};
use crate::Component;

/// A lone component with an owner identity, a status and an outgoing queue.
///
/// The component has no siblings, so vitality lookups always come back empty.
#[derive(Debug)]
pub struct ComponentHarness<C> {
    owner: EntityRef,
    status: Status,
    component: C,
    outbox: Vec<Message>,
    reports: Vec<Report>,
}

impl<C: Component> ComponentHarness<C> {
    pub fn new(name: impl Into<Arc<str>>, faction: Faction, component: C) -> Self {
        Self {
            owner: EntityRef::new(EntityId::new(), name, faction),
            status: Status::Able,
            component,
            outbox: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn owner(&self) -> &EntityRef {
        &self.owner
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The component under test, for inspecting its own state.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Hand one message to the component, whatever its addressing.
    pub fn receive(&mut self, message: &Message) {
        let mut ctx = ComponentContext::new(
            &self.owner,
            &mut self.status,
            &mut self.outbox,
            Default::default(),
            Default::default(),
            &mut self.reports,
        );
        self.component.receive(message, &mut ctx);
    }

    /// Take everything staged so far.
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.outbox)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}
