//! Human-readable status reports emitted by components.

use serde::Serialize;

/// What happened to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportKind {
    Attacked { by: String },
    Asleep,
    Awake,
    HitPoints { hit_points: i32 },
}

/// A single status line, attributed to the entity it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entity: String,
    #[serde(flatten)]
    pub kind: ReportKind,
}

impl Report {
    pub fn new(entity: impl Into<String>, kind: ReportKind) -> Self {
        Self {
            entity: entity.into(),
            kind,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ReportKind::Attacked { by } => write!(f, "{} was attacked by {}", self.entity, by),
            ReportKind::Asleep => write!(f, "{} is sleeping", self.entity),
            ReportKind::Awake => write!(f, "{} woke up", self.entity),
            ReportKind::HitPoints { hit_points } => {
                write!(f, "{} life: {}", self.entity, hit_points)
            }
        }
    }
}
