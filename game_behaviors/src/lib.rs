//! # Game Behaviors
//!
//! The behaviors that ride on `game_bus`: attacking, defending, putting enemies to
//! sleep, waking up, healing and witnessing. Every behavior is a `Component` that
//! only reacts to messages, so an entity's personality is nothing more than the list
//! of components it was built with.
//!
//! ## Modules
//!
//! - **components**: the behavior catalog and `ComponentKind`, the name used in scenario files
//! - **config**: tunable rule constants
//! - **scenario**: TOML rosters and the built-in demo

pub mod components;
pub mod config;
pub mod scenario;

pub use components::*;
pub use config::RulesConfig;
pub use scenario::*;
