use thiserror::Error;

/// Errors raised while loading or building a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Scenario has no entities")]
    EmptyRoster,

    #[error("Entity #{0} has an empty name")]
    UnnamedEntity(usize),

    #[error("Invalid rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
