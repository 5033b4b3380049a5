//! The statistics collector — a passive accumulator mutated only inside the
//! engine's event handlers and returned as an immutable snapshot at the end
//! of the run.

use des_core::SimTime;

/// One `(time, queue length)` observation, recorded after each event handler
/// finishes mutating the waiting line.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueueSample {
    pub time:   SimTime,
    pub length: usize,
}

/// Aggregate results of one simulation run.
///
/// `queue_lengths` is insertion-ordered by recording time and non-decreasing
/// in time by construction, since the clock is monotonic.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Number of customers that arrived (equal to Arrival events dispatched).
    pub total_customers: u64,

    /// Sum over completed customers of `completion time − arrival time`
    /// (queueing plus service), in minutes.
    pub total_wait_mins: f64,

    /// Queue length over time, one sample per handled event.
    pub queue_lengths: Vec<QueueSample>,
}

impl Statistics {
    /// Mean wait per customer, or `None` when no customers arrived.
    ///
    /// The zero-customer case is a degenerate result, not an error; callers
    /// report it as "undefined" rather than dividing by zero.
    pub fn average_wait_mins(&self) -> Option<f64> {
        if self.total_customers == 0 {
            return None;
        }
        Some(self.total_wait_mins / self.total_customers as f64)
    }
}
