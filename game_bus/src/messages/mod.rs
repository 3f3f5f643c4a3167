//! Messages carried by the bus, and the reports components write to the log sink.

mod report;

pub use report::*;

use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, EntityRef};

/// The closed set of message kinds understood by the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// `who` announces that it exists.
    Presence,
    /// `who` attacks the recipient.
    Attack,
    /// `who` puts the recipient to sleep.
    Sleep,
    /// `who` has woken up.
    WakeUp,
    /// `who` offers healing to the recipient.
    Heal,
}

/// Addressing of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recipient {
    /// Delivered to every entity in the roster.
    Broadcast,
    /// Delivered only to the named entity.
    Targeted(EntityId),
}

/// An immutable event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    kind: MessageKind,
    who: EntityRef,
    recipient: Recipient,
}

impl Message {
    pub fn new(kind: MessageKind, who: EntityRef, recipient: Recipient) -> Self {
        Self {
            kind,
            who,
            recipient,
        }
    }

    /// Build a broadcast message.
    pub fn broadcast(kind: MessageKind, who: EntityRef) -> Self {
        Self::new(kind, who, Recipient::Broadcast)
    }

    /// Build a message addressed to a single entity.
    pub fn targeted(kind: MessageKind, who: EntityRef, recipient: EntityId) -> Self {
        Self::new(kind, who, Recipient::Targeted(recipient))
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The entity this message is about.
    pub fn who(&self) -> &EntityRef {
        &self.who
    }

    pub fn recipient(&self) -> Recipient {
        self.recipient
    }

    pub fn is_broadcast(&self) -> bool {
        matches!(self.recipient, Recipient::Broadcast)
    }

    /// Whether an entity with the given ID should see this message.
    pub fn is_addressed_to(&self, id: EntityId) -> bool {
        match self.recipient {
            Recipient::Broadcast => true,
            Recipient::Targeted(target) => target == id,
        }
    }
}
