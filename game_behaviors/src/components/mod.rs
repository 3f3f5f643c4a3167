//! The behavior catalog.
//!
//! | Component | Reacts to | Effect |
//! |-----------|-----------|--------|
//! | `Attacker` | hostile presence | attacks the newcomer |
//! | `Defender` | attack | reports who attacked |
//! | `Sleeper` | hostile presence | casts sleep on the newcomer |
//! | `Sleepy` | hostile sleep, wake-up | disables / re-enables its owner |
//! | `Healer` | heal about its owner | restores the owner's vitality |
//! | `Life` | presence | offers healing, reports own hit points |
//! | `Witness` | presence | announces its owner back to the newcomer |

mod combat;
mod sleep;
mod vitality;
mod witness;

pub use combat::*;
pub use sleep::*;
pub use vitality::*;
pub use witness::*;

use game_bus::Component;
use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;

/// Name of a behavior as written in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Attacker,
    Defender,
    Sleepy,
    Sleeper,
    Healer,
    Life,
    Witness,
}

impl ComponentKind {
    /// Instantiate the behavior with the given rules.
    pub fn build(self, rules: &RulesConfig) -> Box<dyn Component> {
        match self {
            ComponentKind::Attacker => Box::new(Attacker),
            ComponentKind::Defender => Box::new(Defender),
            ComponentKind::Sleepy => Box::new(Sleepy::new(rules.wake_threshold)),
            ComponentKind::Sleeper => Box::new(Sleeper),
            ComponentKind::Healer => Box::new(Healer::new(rules.heal_amount)),
            ComponentKind::Life => Box::new(Life::new(rules.starting_hit_points)),
            ComponentKind::Witness => Box::new(Witness),
        }
    }
}
