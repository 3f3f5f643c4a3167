//! Rule constants for the behavior catalog.

use serde::{Deserialize, Serialize};

/// Tunable numbers used by the behaviors.
///
/// Every field has a default, so a scenario file may override any subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Hit points a `Life` component starts with.
    ///
    /// There is no floor or ceiling; healing adds on top without limit.
    pub starting_hit_points: i32,

    /// Hit points restored by `Healer` per accepted heal.
    pub heal_amount: i32,

    /// Number of hostile sleep spells after which a `Sleepy` entity wakes up.
    pub wake_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_hit_points: 100,
            heal_amount: 5,
            wake_threshold: 3,
        }
    }
}

impl RulesConfig {
    /// Validate configuration for internal consistency.
    pub fn validate(&self) -> Result<(), String> {
        // A zero threshold would never be reached by counting up from zero
        if self.wake_threshold == 0 {
            return Err("wake_threshold must be at least 1".into());
        }

        if self.heal_amount < 0 {
            return Err(format!(
                "heal_amount ({}) must not be negative",
                self.heal_amount
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RulesConfig::default();
        assert_eq!(rules.starting_hit_points, 100);
        assert_eq!(rules.heal_amount, 5);
        assert_eq!(rules.wake_threshold, 3);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let rules: RulesConfig = toml::from_str("heal_amount = 10").unwrap();
        assert_eq!(rules.heal_amount, 10);
        assert_eq!(rules.wake_threshold, 3);
    }

    #[test]
    fn test_invalid_rules() {
        let zero = RulesConfig {
            wake_threshold: 0,
            ..Default::default()
        };
        assert!(zero.validate().is_err());

        let negative = RulesConfig {
            heal_amount: -1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }
}
