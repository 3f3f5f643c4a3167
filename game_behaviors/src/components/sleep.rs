//! Sleep spells and waking up.

use game_bus::{
    Component, ComponentContext, Message, MessageKind, Recipient, Report, ReportKind, Status,
};

/// Casts sleep on every entity of the other faction that announces its presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sleeper;

impl Component for Sleeper {
    fn name(&self) -> &'static str {
        "sleeper"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() != MessageKind::Presence {
            return;
        }

        let who = message.who();
        if who.faction().is_hostile_to(ctx.owner().faction()) {
            ctx.emit(MessageKind::Sleep, Recipient::Targeted(who.id()));
        }
    }
}

/// Makes its owner susceptible to sleep spells.
///
/// Every hostile spell disables the owner and bumps a counter. When the counter
/// reaches the threshold it resets, the owner wakes up and a `WakeUp` is sent to
/// the subject of the message that tipped it over.
#[derive(Debug, Clone)]
pub struct Sleepy {
    spells: u32,
    threshold: u32,
}

impl Sleepy {
    pub fn new(threshold: u32) -> Self {
        Self {
            spells: 0,
            threshold,
        }
    }

    /// Hostile spells counted since the last wake-up.
    pub fn spells(&self) -> u32 {
        self.spells
    }
}

impl Default for Sleepy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Component for Sleepy {
    fn name(&self) -> &'static str {
        "sleepy"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        let who = message.who();
        let owner = ctx.owner().name().to_string();

        match message.kind() {
            MessageKind::Sleep if who.faction().is_hostile_to(ctx.owner().faction()) => {
                self.spells += 1;
                ctx.set_status(Status::Disabled);
                ctx.report(Report::new(owner.as_str(), ReportKind::Asleep));
            }
            MessageKind::WakeUp if who.name() == owner => {
                ctx.set_status(Status::Able);
            }
            _ => {}
        }

        // Checked after every message, whatever its kind.
        if self.spells == self.threshold {
            self.spells = 0;
            ctx.set_status(Status::Able);
            ctx.report(Report::new(owner, ReportKind::Awake));
            ctx.emit(MessageKind::WakeUp, Recipient::Targeted(who.id()));
        }
    }
}
