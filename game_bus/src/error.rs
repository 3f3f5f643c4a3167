//! Engine error types.

use thiserror::Error;

use crate::entities::EntityId;
use crate::messages::MessageKind;

/// Invariant violations detected while running the bus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    /// A targeted message named an entity that is not part of the roster.
    #[error("{kind:?} message addressed to unknown entity {recipient}")]
    UnknownRecipient {
        recipient: EntityId,
        kind: MessageKind,
    },
}

pub type Result<T> = std::result::Result<T, BusError>;
