//! The event model: timestamped occurrences dispatched by the engine.

use des_core::{CustomerId, SimTime};

/// A pending or dispatched simulation event.
///
/// Immutable once created.  Owned exclusively by the [`EventQueue`][crate::EventQueue]
/// until the engine dispatches it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Event {
    /// The simulated time at which the event fires.
    pub time: SimTime,
    pub kind: EventKind,
}

/// The two things that can happen in a single-queue service system.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EventKind {
    /// A new customer arrives and joins the waiting line.
    Arrival,
    /// Service finishes for the referenced customer, who leaves the line.
    Completion { customer: CustomerId },
}

impl Event {
    pub fn arrival(time: SimTime) -> Self {
        Event { time, kind: EventKind::Arrival }
    }

    pub fn completion(time: SimTime, customer: CustomerId) -> Self {
        Event { time, kind: EventKind::Completion { customer } }
    }

    /// `true` for [`EventKind::Arrival`].
    #[inline]
    pub fn is_arrival(&self) -> bool {
        matches!(self.kind, EventKind::Arrival)
    }
}
