//! Integration tests for des-sim.

use std::collections::VecDeque;

use des_core::{CustomerId, SimConfig, SimTime};

use crate::{
    run_replications, Event, EventKind, EventQueue, NoopObserver, QueueSample, ReplicationSummary,
    Sim, SimObserver, Statistics, VariateSource, WaitingLine,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config() -> SimConfig {
    SimConfig {
        duration_mins:          60.0,
        mean_service_mins:      3.0,
        mean_interarrival_mins: 4.0,
        server_count:           2,
        seed:                   42,
    }
}

/// A `VariateSource` that replays scripted durations, then returns "never".
///
/// Exhausted interarrivals yield `f64::INFINITY` so the arrival process shuts
/// off; exhausted services do the same (the run ends at the horizon first in
/// any well-formed test).
struct Scripted {
    interarrivals: VecDeque<f64>,
    services:      VecDeque<f64>,
}

impl Scripted {
    fn new(interarrivals: &[f64], services: &[f64]) -> Self {
        Self {
            interarrivals: interarrivals.iter().copied().collect(),
            services:      services.iter().copied().collect(),
        }
    }
}

impl VariateSource for Scripted {
    fn interarrival(&mut self) -> f64 {
        self.interarrivals.pop_front().unwrap_or(f64::INFINITY)
    }

    fn service(&mut self) -> f64 {
        self.services.pop_front().unwrap_or(f64::INFINITY)
    }
}

/// Everything the engine tells an observer, in call order.
#[derive(Debug, PartialEq)]
enum Op {
    Scheduled(Event),
    Dispatched(Event),
    Sampled(f64, usize),
}

#[derive(Default)]
struct Recording {
    ops:        Vec<Op>,
    final_time: Option<SimTime>,
}

impl Recording {
    fn dispatched(&self) -> Vec<Event> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Dispatched(e) => Some(*e),
                _ => None,
            })
            .collect()
    }
}

impl SimObserver for Recording {
    fn on_schedule(&mut self, event: &Event) {
        self.ops.push(Op::Scheduled(*event));
    }

    fn on_event(&mut self, event: &Event) {
        self.ops.push(Op::Dispatched(*event));
    }

    fn on_queue_sample(&mut self, time: SimTime, length: usize) {
        self.ops.push(Op::Sampled(time.0, length));
    }

    fn on_sim_end(&mut self, final_time: SimTime, _stats: &Statistics) {
        self.final_time = Some(final_time);
    }
}

// ── Event queue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(Event::arrival(SimTime(3.0)));
        q.push(Event::arrival(SimTime(1.0)));
        q.push(Event::arrival(SimTime(2.0)));
        assert_eq!(q.pop().unwrap().time, SimTime(1.0));
        assert_eq!(q.pop().unwrap().time, SimTime(2.0));
        assert_eq!(q.pop().unwrap().time, SimTime(3.0));
        assert!(q.pop().is_none());
    }

    #[test]
    fn equal_times_break_ties_fifo() {
        let mut q = EventQueue::new();
        let t = SimTime(5.0);
        q.push(Event::completion(t, CustomerId(1)));
        q.push(Event::arrival(t));
        q.push(Event::completion(t, CustomerId(2)));
        assert_eq!(q.pop().unwrap().kind, EventKind::Completion { customer: CustomerId(1) });
        assert_eq!(q.pop().unwrap().kind, EventKind::Arrival);
        assert_eq!(q.pop().unwrap().kind, EventKind::Completion { customer: CustomerId(2) });
    }

    #[test]
    fn pop_before_respects_horizon() {
        let mut q = EventQueue::new();
        q.push(Event::arrival(SimTime(10.0)));
        q.push(Event::arrival(SimTime(70.0)));

        assert_eq!(q.pop_before(SimTime(60.0)).unwrap().time, SimTime(10.0));
        // 70 > 60: stays queued.
        assert!(q.pop_before(SimTime(60.0)).is_none());
        assert_eq!(q.len(), 1);
        // An event at exactly the horizon is still in range.
        assert!(q.pop_before(SimTime(70.0)).is_some());
    }

    #[test]
    fn next_time_peeks_earliest() {
        let mut q = EventQueue::new();
        assert!(q.next_time().is_none());
        q.push(Event::arrival(SimTime(4.0)));
        q.push(Event::arrival(SimTime(2.0)));
        assert_eq!(q.next_time(), Some(SimTime(2.0)));
        assert_eq!(q.len(), 2);
    }
}

// ── Waiting line ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod line {
    use super::*;
    use crate::Customer;

    fn customer(id: u32) -> Customer {
        Customer { id: CustomerId(id), arrival_time: SimTime(id as f64) }
    }

    #[test]
    fn removal_is_by_identity_and_preserves_order() {
        let mut line = WaitingLine::new();
        line.push_back(customer(1));
        line.push_back(customer(2));
        line.push_back(customer(3));

        // Remove the middle customer; the others keep their relative order.
        let removed = line.remove(CustomerId(2)).unwrap();
        assert_eq!(removed.id, CustomerId(2));
        assert_eq!(line.get(0).unwrap().id, CustomerId(1));
        assert_eq!(line.get(1).unwrap().id, CustomerId(3));
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn removing_absent_customer_is_none() {
        let mut line = WaitingLine::new();
        line.push_back(customer(1));
        assert!(line.remove(CustomerId(99)).is_none());
        assert_eq!(line.len(), 1);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use super::*;

    #[test]
    fn average_wait_undefined_without_customers() {
        assert_eq!(Statistics::default().average_wait_mins(), None);
    }

    #[test]
    fn average_wait_is_total_over_count() {
        let stats = Statistics {
            total_customers: 4,
            total_wait_mins: 10.0,
            queue_lengths:   vec![],
        };
        assert_eq!(stats.average_wait_mins(), Some(2.5));
    }
}

// ── Engine properties ─────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use super::*;

    #[test]
    fn rejects_invalid_config() {
        let mut cfg = test_config();
        cfg.mean_service_mins = -1.0;
        assert!(Sim::new(cfg).is_err());
    }

    #[test]
    fn dispatched_times_are_monotonic() {
        let mut rec = Recording::default();
        Sim::new(test_config()).unwrap().run(&mut rec).unwrap();

        let times: Vec<f64> = rec.dispatched().iter().map(|e| e.time.0).collect();
        assert!(!times.is_empty());
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "clock went backwards");
    }

    #[test]
    fn total_customers_equals_dispatched_arrivals() {
        let mut rec = Recording::default();
        let stats = Sim::new(test_config()).unwrap().run(&mut rec).unwrap();

        let arrivals = rec.dispatched().iter().filter(|e| e.is_arrival()).count();
        assert_eq!(stats.total_customers, arrivals as u64);
    }

    #[test]
    fn identical_config_and_seed_reproduce_identical_statistics() {
        let a = Sim::new(test_config()).unwrap().run(&mut NoopObserver).unwrap();
        let b = Sim::new(test_config()).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(a, b); // includes the full queue-length sample sequence
    }

    #[test]
    fn different_seeds_produce_different_runs() {
        let a = Sim::new(test_config()).unwrap().run(&mut NoopObserver).unwrap();
        let mut cfg = test_config();
        cfg.seed = 43;
        let b = Sim::new(cfg).unwrap().run(&mut NoopObserver).unwrap();
        assert_ne!(a.queue_lengths, b.queue_lengths);
    }

    #[test]
    fn sample_times_never_decrease() {
        let stats = Sim::new(test_config()).unwrap().run(&mut NoopObserver).unwrap();
        assert!(!stats.queue_lengths.is_empty());
        assert!(stats
            .queue_lengths
            .windows(2)
            .all(|w| w[0].time.0 <= w[1].time.0));
    }

    #[test]
    fn in_service_count_never_exceeds_server_count() {
        // A customer is in service from the moment their Completion is
        // scheduled until that Completion is dispatched.  Replaying the
        // observer stream in call order tracks the in-flight count exactly.
        for servers in [1, 2, 5] {
            let mut cfg = test_config();
            cfg.server_count = servers;
            cfg.duration_mins = 500.0;

            let mut rec = Recording::default();
            Sim::new(cfg).unwrap().run(&mut rec).unwrap();

            let mut in_service: usize = 0;
            for op in &rec.ops {
                match op {
                    Op::Scheduled(e) if !e.is_arrival() => {
                        in_service += 1;
                        assert!(in_service <= servers, "capacity exceeded with {servers} servers");
                    }
                    Op::Dispatched(e) if !e.is_arrival() => in_service -= 1,
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn event_at_exactly_the_horizon_is_processed() {
        let mut cfg = test_config();
        cfg.duration_mins = 50.0;
        cfg.server_count = 1;
        let variates = Scripted::new(&[50.0], &[0.0]);
        let stats = Sim::with_variates(cfg, variates)
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();
        assert_eq!(stats.total_customers, 1);
    }

    #[test]
    fn event_past_the_horizon_is_not_processed() {
        let mut cfg = test_config();
        cfg.duration_mins = 50.0;
        cfg.server_count = 1;
        // Arrival at 5, completion at 6, next arrival at 105 (dropped).
        let variates = Scripted::new(&[5.0, 100.0], &[1.0]);

        let mut rec = Recording::default();
        let stats = Sim::with_variates(cfg, variates)
            .unwrap()
            .run(&mut rec)
            .unwrap();

        assert_eq!(stats.total_customers, 1);
        assert_eq!(rec.dispatched().len(), 2);
        // The clock stops at the last dispatched event, not the horizon.
        assert_eq!(rec.final_time, Some(SimTime(6.0)));
    }
}

// ── End-to-end scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use super::*;

    /// One forced arrival at t=0, instantaneous service, one server.
    #[test]
    fn single_instant_customer() {
        let mut cfg = test_config();
        cfg.server_count = 1;
        let variates = Scripted::new(&[0.0], &[0.0]);

        let stats = Sim::with_variates(cfg, variates)
            .unwrap()
            .run(&mut NoopObserver)
            .unwrap();

        assert_eq!(stats.total_customers, 1);
        assert_eq!(stats.total_wait_mins, 0.0);
        assert_eq!(
            stats.queue_lengths,
            vec![
                QueueSample { time: SimTime(0.0), length: 1 },
                QueueSample { time: SimTime(0.0), length: 0 },
            ]
        );
        assert_eq!(stats.average_wait_mins(), Some(0.0));
    }

    /// Zero horizon: the first arrival (strictly after t=0) is never
    /// processed.  A degenerate result, not an error.
    #[test]
    fn zero_horizon_serves_nobody() {
        let mut cfg = test_config();
        cfg.duration_mins = 0.0;

        let stats = Sim::new(cfg).unwrap().run(&mut NoopObserver).unwrap();

        assert_eq!(stats.total_customers, 0);
        assert_eq!(stats.average_wait_mins(), None);
        assert!(stats.queue_lengths.is_empty());
    }

    /// Two servers, three arrivals before any completion.  The third
    /// customer waits for a slot, the line transiently reaches 3, and the
    /// first completion fires out of arrival order — exercising by-identity
    /// removal.
    #[test]
    fn third_customer_waits_for_a_free_server() {
        let mut cfg = test_config();
        cfg.server_count = 2;
        // Arrivals at t=1, 2, 3.  Customer 1 is served for 10 (done t=11),
        // customer 2 for 3 (done t=5), customer 3 for 2 once admitted at
        // t=5 (done t=7).
        let variates = Scripted::new(&[1.0, 1.0, 1.0], &[10.0, 3.0, 2.0]);

        let mut rec = Recording::default();
        let stats = Sim::with_variates(cfg, variates)
            .unwrap()
            .run(&mut rec)
            .unwrap();

        assert_eq!(stats.total_customers, 3);
        assert_eq!(
            stats.queue_lengths,
            vec![
                QueueSample { time: SimTime(1.0),  length: 1 },
                QueueSample { time: SimTime(2.0),  length: 2 },
                QueueSample { time: SimTime(3.0),  length: 3 }, // transient peak
                QueueSample { time: SimTime(5.0),  length: 2 },
                QueueSample { time: SimTime(7.0),  length: 1 },
                QueueSample { time: SimTime(11.0), length: 0 },
            ]
        );
        // Waits: customer 2 → 3, customer 3 → 4, customer 1 → 10.
        assert_eq!(stats.total_wait_mins, 17.0);

        // Customer 3's completion is only scheduled after customer 2's
        // dispatches — never while both servers are busy.
        let c2_done = rec
            .ops
            .iter()
            .position(|op| {
                matches!(op, Op::Dispatched(e)
                    if e.kind == EventKind::Completion { customer: CustomerId(2) })
            })
            .unwrap();
        let c3_scheduled = rec
            .ops
            .iter()
            .position(|op| {
                matches!(op, Op::Scheduled(e)
                    if e.kind == EventKind::Completion { customer: CustomerId(3) })
            })
            .unwrap();
        assert!(c3_scheduled > c2_done);
    }
}

// ── Replications ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod replications {
    use super::*;

    #[test]
    fn batches_are_reproducible() {
        let a = run_replications(&test_config(), 5).unwrap();
        let b = run_replications(&test_config(), 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn replication_zero_matches_a_plain_run() {
        let batch = run_replications(&test_config(), 1).unwrap();
        let single = Sim::new(test_config()).unwrap().run(&mut NoopObserver).unwrap();
        assert_eq!(batch[0], single);
    }

    #[test]
    fn replications_are_independent() {
        let batch = run_replications(&test_config(), 3).unwrap();
        assert_ne!(batch[0].queue_lengths, batch[1].queue_lengths);
        assert_ne!(batch[1].queue_lengths, batch[2].queue_lengths);
    }

    #[test]
    fn summary_aggregates_served_runs_only() {
        let served = Statistics {
            total_customers: 2,
            total_wait_mins: 8.0,
            queue_lengths:   vec![],
        };
        let empty = Statistics::default();

        let summary = ReplicationSummary::from_runs(&[served, empty]);
        assert_eq!(summary.runs, 2);
        assert_eq!(summary.total_customers, 2);
        assert_eq!(summary.mean_avg_wait_mins, Some(4.0));
    }

    #[test]
    fn summary_of_empty_runs_has_no_average() {
        let summary = ReplicationSummary::from_runs(&[Statistics::default()]);
        assert_eq!(summary.mean_avg_wait_mins, None);
    }

    #[test]
    fn invalid_config_fails_before_any_run() {
        let mut cfg = test_config();
        cfg.server_count = 0;
        assert!(run_replications(&cfg, 3).is_err());
    }
}
