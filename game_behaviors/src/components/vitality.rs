//! Hit points and healing.

use game_bus::{
    Component, ComponentContext, Message, MessageKind, Recipient, Report, ReportKind, Status,
    Vitality,
};

/// Holds its owner's hit points.
///
/// On every presence it offers healing to whoever announced themselves, and when
/// the announcement is about its own owner it reports the current hit points.
#[derive(Debug, Clone)]
pub struct Life {
    hit_points: i32,
}

impl Life {
    pub fn new(hit_points: i32) -> Self {
        Self { hit_points }
    }
}

impl Default for Life {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Vitality for Life {
    fn hit_points(&self) -> i32 {
        self.hit_points
    }

    fn restore(&mut self, amount: i32) {
        self.hit_points = self.hit_points.saturating_add(amount);
    }
}

impl Component for Life {
    fn name(&self) -> &'static str {
        "life"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() != MessageKind::Presence {
            return;
        }

        let who = message.who();
        ctx.emit(MessageKind::Heal, Recipient::Targeted(who.id()));

        if who.name() == ctx.owner().name() {
            let report = Report::new(
                who.name(),
                ReportKind::HitPoints {
                    hit_points: self.hit_points,
                },
            );
            ctx.report(report);
        }
    }

    fn vitality(&self) -> Option<&dyn Vitality> {
        Some(self)
    }

    fn vitality_mut(&mut self) -> Option<&mut dyn Vitality> {
        Some(self)
    }
}

/// Applies heals about its owner to a sibling's vitality, while the owner is awake.
#[derive(Debug, Clone)]
pub struct Healer {
    amount: i32,
}

impl Healer {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }
}

impl Default for Healer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Component for Healer {
    fn name(&self) -> &'static str {
        "healer"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() != MessageKind::Heal || ctx.status() != Status::Able {
            return;
        }
        if message.who().name() != ctx.owner().name() {
            return;
        }

        match ctx.vitality_mut() {
            Some(vitality) => vitality.restore(self.amount),
            None => tracing::debug!(entity = %ctx.owner(), "heal ignored, no vitality"),
        }
    }
}
