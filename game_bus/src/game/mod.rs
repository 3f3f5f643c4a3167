//! The game loop - owns the roster and moves messages between ticks.
//!
//! Each tick runs in two strictly ordered phases:
//! 1. **Collect**: every entity drains its components' queues, in roster order
//! 2. **Deliver**: the collected queue is handed out, broadcasts to everyone and
//!    targeted messages to their recipient
//!
//! Anything staged while delivering belongs to the next tick.

mod snapshot;

pub use snapshot::*;

use crate::entities::{Entity, EntityId};
use crate::error::{BusError, Result};
use crate::messages::{Message, MessageKind, Recipient, Report};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No tick has run yet; the presence announcement is still owed.
    #[default]
    NotStarted,
    /// At least one tick has run.
    Running { tick: u64 },
}

/// What a single tick did.
#[derive(Debug, Clone, Default)]
pub struct TickSummary {
    /// 1-based tick number.
    pub tick: u64,
    /// Messages delivered during this tick, in delivery order.
    pub delivered: Vec<Message>,
    /// Status lines written by components while reacting.
    pub reports: Vec<Report>,
}

/// The simulation: a fixed roster and the tick-scoped message queue.
#[derive(Debug, Default)]
pub struct Game {
    entities: Vec<Entity>,
    queue: Vec<Message>,
    phase: GamePhase,
}

impl Game {
    /// Create a game over the given roster. Roster order is delivery order.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            queue: Vec::new(),
            phase: GamePhase::NotStarted,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of ticks run so far.
    pub fn ticks_elapsed(&self) -> u64 {
        match self.phase {
            GamePhase::NotStarted => 0,
            GamePhase::Running { tick } => tick,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// First entity in roster order with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name() == name)
    }

    /// Run one tick: announce presence on the first call, collect, then deliver.
    ///
    /// On error the tick still counts and its effects stay applied, but its
    /// summary is lost; the reports were already written to the log.
    pub fn tick(&mut self) -> Result<TickSummary> {
        let tick = self.ticks_elapsed() + 1;

        if self.phase == GamePhase::NotStarted {
            self.announce_presence();
        }
        self.phase = GamePhase::Running { tick };

        for entity in &mut self.entities {
            let messages = entity.tick();
            self.queue.extend(messages);
        }

        let (delivered, reports) = self.deliver()?;
        Ok(TickSummary {
            tick,
            delivered,
            reports,
        })
    }

    /// One presence broadcast per entity, in roster order.
    fn announce_presence(&mut self) {
        tracing::debug!(entities = self.entities.len(), "announcing presence");
        for entity in &self.entities {
            self.queue.push(Message::broadcast(
                MessageKind::Presence,
                entity.identity().clone(),
            ));
        }
    }

    /// Deliver everything queued so far and leave the queue empty.
    ///
    /// Returns the delivered messages and the reports they caused. A targeted
    /// message for an entity outside the roster does not stop the pass; the first
    /// such message is returned as an error once every other message is delivered.
    /// In that case the delivered messages and reports are not returned. Every
    /// report is logged at INFO before returning either way.
    pub fn deliver(&mut self) -> Result<(Vec<Message>, Vec<Report>)> {
        let queue = std::mem::take(&mut self.queue);
        let mut reports = Vec::new();
        let mut undeliverable: Option<BusError> = None;

        tracing::debug!(messages = queue.len(), "delivering");

        for message in &queue {
            match message.recipient() {
                Recipient::Broadcast => {
                    for entity in &mut self.entities {
                        entity.receive(message, &mut reports);
                    }
                }
                Recipient::Targeted(id) => {
                    match self.entities.iter_mut().find(|entity| entity.id() == id) {
                        Some(entity) => entity.receive(message, &mut reports),
                        None => {
                            tracing::warn!(
                                recipient = %id,
                                kind = ?message.kind(),
                                who = %message.who(),
                                "message addressed to unknown entity"
                            );
                            undeliverable.get_or_insert(BusError::UnknownRecipient {
                                recipient: id,
                                kind: message.kind(),
                            });
                        }
                    }
                }
            }
        }

        for report in &reports {
            tracing::info!(entity = %report.entity, "{}", report);
        }

        match undeliverable {
            Some(err) => Err(err),
            None => Ok((queue, reports)),
        }
    }

    /// Run `ticks` ticks, or forever when `ticks` is `None` or zero.
    ///
    /// Returns the number of ticks run, or stops at the first failing tick.
    pub fn main_loop(&mut self, ticks: Option<u64>) -> Result<u64> {
        let limit = ticks.filter(|&n| n > 0);
        let mut ran = 0;

        while limit.map_or(true, |limit| ran < limit) {
            tracing::info!(tick = self.ticks_elapsed(), "tick number {}", self.ticks_elapsed());
            self.tick()?;
            ran += 1;
        }

        Ok(ran)
    }

    /// Serializable view of the roster.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }
}
