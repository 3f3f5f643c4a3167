//! # Game Bus
//!
//! The engine crate - entities, the message bus and the tick loop that drives them.
//! Entities are aggregates of independent components. Components never call each
//! other: they react to messages and stage new ones, and the `Game` moves staged
//! messages from one tick to the next.
//!
//! Behaviors themselves live in `game_behaviors`; this crate only knows the
//! `Component` trait and the closed set of message kinds.

pub mod entities;
pub mod error;
pub mod game;
pub mod messages;
pub mod testing;

pub use entities::*;
pub use error::{BusError, Result};
pub use game::*;
pub use messages::*;
