//! Scenarios - a roster, the rules it plays by and how long it runs.
//!
//! # Example TOML
//!
//! ```toml
//! ticks = 10
//!
//! [rules]
//! heal_amount = 5
//!
//! [[entity]]
//! name = "link"
//! faction = "good"
//! components = ["witness", "attacker", "defender", "sleepy", "life", "healer"]
//!
//! [[entity]]
//! name = "octorok"
//! faction = "evil"
//! components = ["witness", "defender", "sleeper", "life", "healer"]
//! ```

mod error;

pub use error::{Result, ScenarioError};

use game_bus::{Entity, Faction, Game};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::ComponentKind;
use crate::config::RulesConfig;

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub name: String,
    pub faction: Faction,
    /// Behaviors in insertion order.
    #[serde(default)]
    pub components: Vec<ComponentKind>,
}

impl EntitySpec {
    pub fn new(
        name: impl Into<String>,
        faction: Faction,
        components: impl IntoIterator<Item = ComponentKind>,
    ) -> Self {
        Self {
            name: name.into(),
            faction,
            components: components.into_iter().collect(),
        }
    }

    /// Instantiate the entity with the given rules.
    pub fn build(&self, rules: &RulesConfig) -> Entity {
        let mut entity = Entity::new(self.name.clone(), self.faction);
        for kind in &self.components {
            entity.add_component(kind.build(rules));
        }
        entity
    }
}

/// A complete, runnable setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Ticks to run; zero runs forever.
    #[serde(default)]
    pub ticks: u64,

    #[serde(default)]
    pub rules: RulesConfig,

    /// Roster in delivery order.
    #[serde(default, rename = "entity")]
    pub entities: Vec<EntitySpec>,
}

impl Scenario {
    /// The classic four-entity skirmish.
    pub fn demo() -> Self {
        use ComponentKind::*;

        Self {
            ticks: 10,
            rules: RulesConfig::default(),
            entities: vec![
                EntitySpec::new(
                    "link",
                    Faction::Good,
                    [Witness, Attacker, Defender, Sleepy, Life, Healer],
                ),
                EntitySpec::new(
                    "ganon",
                    Faction::Evil,
                    [Witness, Attacker, Defender, Life, Healer],
                ),
                EntitySpec::new("armos", Faction::Evil, [Witness, Attacker, Life]),
                EntitySpec::new(
                    "octorok",
                    Faction::Evil,
                    [Witness, Defender, Sleeper, Life, Healer],
                ),
            ],
        }
    }

    /// Parse a scenario from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read and parse a scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading scenario");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the roster and rules.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate().map_err(ScenarioError::InvalidRules)?;

        if self.entities.is_empty() {
            return Err(ScenarioError::EmptyRoster);
        }

        if let Some(index) = self
            .entities
            .iter()
            .position(|spec| spec.name.trim().is_empty())
        {
            return Err(ScenarioError::UnnamedEntity(index));
        }

        Ok(())
    }

    /// Build a fresh game from this scenario.
    pub fn build(&self) -> Result<Game> {
        self.validate()?;
        let entities = self
            .entities
            .iter()
            .map(|spec| spec.build(&self.rules))
            .collect();
        Ok(Game::new(entities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_bus::{Message, MessageKind, Recipient, Status};

    /// Count messages of `kind` from `from` addressed to the entity named `to`.
    fn count(messages: &[&Message], game: &Game, kind: MessageKind, from: &str, to: &str) -> usize {
        let target = game.find_by_name(to).unwrap().id();
        messages
            .iter()
            .filter(|m| {
                m.kind() == kind
                    && m.who().name() == from
                    && m.recipient() == Recipient::Targeted(target)
            })
            .count()
    }

    #[test]
    fn test_hero_and_villain_first_tick() {
        use ComponentKind::*;
        let scenario = Scenario {
            ticks: 1,
            rules: RulesConfig::default(),
            entities: vec![
                EntitySpec::new("hero", Faction::Good, [Witness, Attacker, Defender, Life]),
                EntitySpec::new("villain", Faction::Evil, [Witness, Attacker, Defender, Life]),
            ],
        };
        let mut game = scenario.build().unwrap();

        let summary = game.tick().unwrap();
        assert_eq!(summary.delivered.len(), 2);
        assert!(summary
            .delivered
            .iter()
            .all(|m| m.kind() == MessageKind::Presence && m.is_broadcast()));
        let lines: Vec<_> = summary.reports.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["hero life: 100", "villain life: 100"]);

        // Everything staged for tick 2.
        let staged: Vec<&Message> = game
            .entities()
            .iter()
            .flat_map(|e| e.pending_messages())
            .collect();

        assert_eq!(count(&staged, &game, MessageKind::Attack, "hero", "villain"), 1);
        assert_eq!(count(&staged, &game, MessageKind::Attack, "villain", "hero"), 1);
        assert_eq!(count(&staged, &game, MessageKind::Attack, "hero", "hero"), 0);
        assert_eq!(count(&staged, &game, MessageKind::Attack, "villain", "villain"), 0);
        assert_eq!(count(&staged, &game, MessageKind::Heal, "hero", "hero"), 1);
        assert_eq!(count(&staged, &game, MessageKind::Heal, "villain", "villain"), 1);
        // Witness echoes keep presence flowing, always targeted.
        assert_eq!(count(&staged, &game, MessageKind::Presence, "hero", "villain"), 1);
        assert_eq!(count(&staged, &game, MessageKind::Presence, "villain", "hero"), 1);
        assert!(staged.iter().all(|m| !m.is_broadcast()));

        // Tick 2 delivers the attacks.
        let second = game.tick().unwrap();
        let lines: Vec<_> = second.reports.iter().map(ToString::to_string).collect();
        assert!(lines.contains(&"villain was attacked by hero".to_string()));
        assert!(lines.contains(&"hero was attacked by villain".to_string()));
    }

    #[test]
    fn test_attackers_never_target_allies() {
        let mut game = Scenario::demo().build().unwrap();

        for _ in 0..10 {
            let summary = game.tick().unwrap();
            for message in &summary.delivered {
                if !matches!(message.kind(), MessageKind::Attack | MessageKind::Sleep) {
                    continue;
                }
                let Recipient::Targeted(id) = message.recipient() else {
                    panic!("hostile messages are always targeted");
                };
                let target = game.entity(id).unwrap();
                assert_ne!(target.faction(), message.who().faction());
            }
        }
    }

    #[test]
    fn test_demo_runs_and_factions_hold() {
        let scenario = Scenario::demo();
        let mut game = scenario.build().unwrap();
        let before: Vec<_> = game.entities().iter().map(|e| e.faction()).collect();

        assert_eq!(game.main_loop(Some(scenario.ticks)).unwrap(), 10);

        let after: Vec<_> = game.entities().iter().map(|e| e.faction()).collect();
        assert_eq!(before, after);
        let names: Vec<_> = game.entities().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["link", "ganon", "armos", "octorok"]);

        // Octorok's spells land on link from tick 2 on.
        assert_eq!(game.find_by_name("link").unwrap().status(), Status::Disabled);
    }

    #[test]
    fn test_from_toml_str() {
        let scenario = Scenario::from_toml_str(
            r#"
            ticks = 3

            [rules]
            heal_amount = 7

            [[entity]]
            name = "link"
            faction = "good"
            components = ["witness", "life", "healer"]

            [[entity]]
            name = "armos"
            faction = "evil"
            "#,
        )
        .unwrap();

        assert_eq!(scenario.ticks, 3);
        assert_eq!(scenario.rules.heal_amount, 7);
        assert_eq!(scenario.rules.wake_threshold, 3);
        assert_eq!(scenario.entities.len(), 2);
        assert_eq!(
            scenario.entities[0].components,
            vec![ComponentKind::Witness, ComponentKind::Life, ComponentKind::Healer]
        );
        assert!(scenario.entities[1].components.is_empty());

        let game = scenario.build().unwrap();
        let link = game.find_by_name("link").unwrap();
        assert_eq!(link.component_names(), vec!["witness", "life", "healer"]);
        assert_eq!(link.hit_points(), Some(100));
    }

    #[test]
    fn test_max_heal_amount_runs() {
        let scenario = Scenario::from_toml_str(
            r#"
            [rules]
            heal_amount = 2147483647

            [[entity]]
            name = "link"
            faction = "good"
            components = ["witness", "life", "healer"]
            "#,
        )
        .unwrap();
        let mut game = scenario.build().unwrap();

        assert_eq!(game.main_loop(Some(5)).unwrap(), 5);
        assert_eq!(game.find_by_name("link").unwrap().hit_points(), Some(i32::MAX));
    }

    #[test]
    fn test_unknown_component_is_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            [[entity]]
            name = "link"
            faction = "good"
            components = ["teleporter"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let err = Scenario::from_toml_str("ticks = 5").unwrap_err();
        assert!(matches!(err, ScenarioError::EmptyRoster));
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        let err = Scenario::from_toml_str(
            r#"
            [rules]
            wake_threshold = 0

            [[entity]]
            name = "link"
            faction = "good"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidRules(_)));
    }

    #[test]
    fn test_unnamed_entity_is_rejected() {
        let mut scenario = Scenario::demo();
        scenario.entities[2].name = "  ".into();
        assert!(matches!(
            scenario.build().unwrap_err(),
            ScenarioError::UnnamedEntity(2)
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Scenario::load("/nonexistent/skirmish.toml").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }
}
