//! The component capability and the context a component sees while reacting.

use super::{EntityRef, Status};
use crate::messages::{Message, MessageKind, Recipient, Report};

/// A behavioral unit owned by exactly one entity.
///
/// Components communicate only through side effects: staging messages for the
/// next tick, changing the owner's status, or writing a report. A component never
/// holds a pointer to its owner; the owner is handed in through the context for the
/// duration of each `receive` call.
pub trait Component: std::fmt::Debug {
    /// Stable lowercase name, used in scenario files and snapshots.
    fn name(&self) -> &'static str;

    /// React to a message delivered to the owning entity.
    ///
    /// Messages a component does not care about are ignored.
    fn receive(&mut self, _message: &Message, _ctx: &mut ComponentContext<'_>) {}

    /// The hit-point capability, if this component carries one.
    fn vitality(&self) -> Option<&dyn Vitality> {
        None
    }

    /// Mutable access to the hit-point capability.
    fn vitality_mut(&mut self) -> Option<&mut dyn Vitality> {
        None
    }
}

/// Hit points that sibling components may read and restore.
pub trait Vitality {
    fn hit_points(&self) -> i32;

    /// Add hit points, saturating at `i32::MAX`.
    fn restore(&mut self, amount: i32);
}

/// A mounted component together with its outgoing queue.
#[derive(Debug)]
pub(crate) struct ComponentSlot {
    pub(crate) component: Box<dyn Component>,
    pub(crate) outbox: Vec<Message>,
}

impl ComponentSlot {
    pub(crate) fn new(component: Box<dyn Component>) -> Self {
        Self {
            component,
            outbox: Vec::new(),
        }
    }

    /// Drain the outgoing queue, leaving it empty.
    pub(crate) fn tick(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.outbox)
    }
}

/// Everything a component may touch while handling one message.
pub struct ComponentContext<'a> {
    owner: &'a EntityRef,
    status: &'a mut Status,
    outbox: &'a mut Vec<Message>,
    before: &'a mut [ComponentSlot],
    after: &'a mut [ComponentSlot],
    reports: &'a mut Vec<Report>,
}

impl<'a> ComponentContext<'a> {
    pub(crate) fn new(
        owner: &'a EntityRef,
        status: &'a mut Status,
        outbox: &'a mut Vec<Message>,
        before: &'a mut [ComponentSlot],
        after: &'a mut [ComponentSlot],
        reports: &'a mut Vec<Report>,
    ) -> Self {
        Self {
            owner,
            status,
            outbox,
            before,
            after,
            reports,
        }
    }

    /// The entity that owns the component being called.
    pub fn owner(&self) -> &EntityRef {
        self.owner
    }

    pub fn status(&self) -> Status {
        *self.status
    }

    pub fn set_status(&mut self, status: Status) {
        *self.status = status;
    }

    /// Stage a message about the owner for the next tick.
    pub fn emit(&mut self, kind: MessageKind, recipient: Recipient) {
        self.outbox
            .push(Message::new(kind, self.owner.clone(), recipient));
    }

    /// Write a status line to the log sink.
    pub fn report(&mut self, report: Report) {
        self.reports.push(report);
    }

    /// Find the first sibling component exposing the vitality capability.
    pub fn vitality_mut(&mut self) -> Option<&mut dyn Vitality> {
        self.before
            .iter_mut()
            .chain(self.after.iter_mut())
            .find_map(|slot| slot.component.vitality_mut())
    }
}
