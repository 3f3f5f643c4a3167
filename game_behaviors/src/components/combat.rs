//! Attacking and being attacked.

use game_bus::{Component, ComponentContext, Message, MessageKind, Recipient, Report, ReportKind};

/// Attacks every entity of the other faction that announces its presence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Attacker;

impl Component for Attacker {
    fn name(&self) -> &'static str {
        "attacker"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() != MessageKind::Presence {
            return;
        }

        let who = message.who();
        if who.faction().is_hostile_to(ctx.owner().faction()) {
            ctx.emit(MessageKind::Attack, Recipient::Targeted(who.id()));
        }
    }
}

/// Reports attacks against its owner. Attacks carry no damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Defender;

impl Component for Defender {
    fn name(&self) -> &'static str {
        "defender"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() == MessageKind::Attack {
            let report = Report::new(
                ctx.owner().name(),
                ReportKind::Attacked {
                    by: message.who().name().to_string(),
                },
            );
            ctx.report(report);
        }
    }
}
