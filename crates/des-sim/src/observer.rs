//! Simulation observer trait for progress reporting and data collection.

use des_core::SimTime;

use crate::{Event, Statistics};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers see events but never mutate
/// simulation state; streaming output writers hang off these hooks.
///
/// # Example — event printer
///
/// ```rust,ignore
/// struct EventPrinter;
///
/// impl SimObserver for EventPrinter {
///     fn on_event(&mut self, event: &Event) {
///         println!("{}: {:?}", event.time, event.kind);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called whenever the engine inserts a new event into the queue.
    fn on_schedule(&mut self, _event: &Event) {}

    /// Called when an event is dispatched, after the clock has advanced to
    /// its time but before its handler runs.
    fn on_event(&mut self, _event: &Event) {}

    /// Called each time a handler records a `(time, queue length)` sample.
    fn on_queue_sample(&mut self, _time: SimTime, _length: usize) {}

    /// Called once after the loop terminates, with the final clock reading
    /// and the completed statistics snapshot.
    fn on_sim_end(&mut self, _final_time: SimTime, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
