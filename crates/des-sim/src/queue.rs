//! `EventQueue` — time-ordered pending-event structure.
//!
//! # Ordering and tie-breaks
//!
//! A binary min-heap keyed on `(time, insertion sequence)`.  Timestamps are
//! compared with `f64::total_cmp`, and events with equal timestamps are
//! yielded in FIFO insertion order.  The tie-break is deliberate and part of
//! the queue's contract: heap implementations are free to reorder equal keys,
//! and a run's determinism must not depend on that accident.
//!
//! # Performance note
//!
//! The queue holds at most `server_count + 1` events at any moment (one
//! in-flight Completion per busy server plus the single lookahead Arrival),
//! so the O(log n) heap operations are effectively constant-time here.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use des_core::SimTime;

use crate::Event;

/// A queued event tagged with its insertion sequence number.
#[derive(Copy, Clone, Debug)]
struct Pending {
    event: Event,
    seq:   u64,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time
            .total_cmp(&other.event.time)
            .then(self.seq.cmp(&other.seq))
    }
}

/// A multiset of [`Event`]s supporting insert and extract-minimum by time.
///
/// Invariant: every popped event's time is `>=` all previously popped events'
/// times — this is what keeps the simulation clock monotonic.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<Reverse<Pending>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pending event.
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Pending { event, seq }));
    }

    /// Remove and return the earliest pending event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|Reverse(p)| p.event)
    }

    /// Remove and return the earliest pending event, but only if its time is
    /// at or before `horizon`.  An event past the horizon stays queued.
    pub fn pop_before(&mut self, horizon: SimTime) -> Option<Event> {
        if self.next_time()?.0 > horizon.0 {
            return None;
        }
        self.pop()
    }

    /// The timestamp of the earliest pending event, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|Reverse(p)| p.event.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
