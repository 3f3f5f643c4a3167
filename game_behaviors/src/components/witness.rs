//! Presence echoes.

use game_bus::{Component, ComponentContext, Message, MessageKind, Recipient};

/// Answers every presence by announcing its owner back to the announcer.
///
/// This keeps presence flowing after the one-time opening broadcast, which is what
/// lets presence-driven behaviors act on later ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Witness;

impl Component for Witness {
    fn name(&self) -> &'static str {
        "witness"
    }

    fn receive(&mut self, message: &Message, ctx: &mut ComponentContext<'_>) {
        if message.kind() == MessageKind::Presence {
            ctx.emit(
                MessageKind::Presence,
                Recipient::Targeted(message.who().id()),
            );
        }
    }
}
