//! The `Sim` struct and its event loop.

use des_core::{CustomerId, SimClock, SimConfig, SimTime};

use crate::{
    Customer, Event, EventKind, EventQueue, ExponentialVariates, SimError, SimObserver, SimResult,
    Statistics, VariateSource, WaitingLine,
};

/// The simulation engine: a state machine over two event kinds.
///
/// `Sim` owns all run state — clock, event queue, waiting line, ID counter,
/// statistics — so independent runs never share anything.  `run` consumes the
/// engine and returns the statistics snapshot; there is no way to observe a
/// half-finished run except through a [`SimObserver`].
///
/// Determinism: a fixed config (seed included) reproduces the exact event
/// sequence and statistics, bit for bit.  The only stochastic inputs flow
/// through the [`VariateSource`] seam, and the engine draws from it in a
/// fixed order per handler.
pub struct Sim<V: VariateSource> {
    config:   SimConfig,
    clock:    SimClock,
    events:   EventQueue,
    line:     WaitingLine,
    next_id:  CustomerId,
    stats:    Statistics,
    variates: V,
}

impl Sim<ExponentialVariates> {
    /// Build an engine drawing exponential durations seeded from
    /// `config.seed`.
    ///
    /// Fails fast on invalid configuration (non-positive means, zero
    /// servers, negative or non-finite horizon).
    pub fn new(config: SimConfig) -> SimResult<Self> {
        let variates = ExponentialVariates::from_config(&config);
        Self::with_variates(config, variates)
    }
}

impl<V: VariateSource> Sim<V> {
    /// Build an engine with an explicit duration source.
    ///
    /// Tests use this to script exact interarrival/service durations.
    pub fn with_variates(config: SimConfig, variates: V) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock:   SimClock::new(),
            events:  EventQueue::new(),
            line:    WaitingLine::new(),
            next_id: CustomerId::FIRST,
            stats:   Statistics::default(),
            variates,
        })
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Run the simulation to completion and return the statistics snapshot.
    ///
    /// The loop pops the earliest pending event, advances the clock to its
    /// timestamp, and dispatches to the matching handler until the queue
    /// empties or the next event lies past the horizon.  An event past the
    /// horizon is never processed.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimResult<Statistics> {
        let horizon = self.config.horizon();

        // Initial state: one Arrival pending, everything else empty.
        let first = SimTime::ZERO + self.variates.interarrival();
        self.schedule(Event::arrival(first), observer);

        while let Some(event) = self.events.pop_before(horizon) {
            self.clock.advance_to(event.time)?;
            observer.on_event(&event);

            match event.kind {
                EventKind::Arrival => self.handle_arrival(event.time, observer),
                EventKind::Completion { customer } => {
                    self.handle_completion(customer, event.time, observer)?;
                }
            }
        }

        observer.on_sim_end(self.clock.now(), &self.stats);
        Ok(self.stats)
    }

    // ── Event handlers ────────────────────────────────────────────────────

    /// A customer arrives at time `t`.
    fn handle_arrival<O: SimObserver>(&mut self, t: SimTime, observer: &mut O) {
        let customer = Customer {
            id:           self.next_id.take_next(),
            arrival_time: t,
        };
        self.line.push_back(customer);
        self.stats.total_customers += 1;
        self.record_sample(t, observer);

        // The arrival process never sleeps: each arrival books the next one.
        let next_arrival = t + self.variates.interarrival();
        self.schedule(Event::arrival(next_arrival), observer);

        // A server slot is free for this customer iff the line (including
        // them) fits within the server count; service starts immediately.
        if self.line.len() <= self.config.server_count {
            let done = t + self.variates.service();
            self.schedule(Event::completion(done, customer.id), observer);
        }
    }

    /// Service finishes for `customer` at time `t`.
    fn handle_completion<O: SimObserver>(
        &mut self,
        customer: CustomerId,
        t:        SimTime,
        observer: &mut O,
    ) -> SimResult<()> {
        // Removal is by identity: with several servers, completions fire out
        // of arrival order, so the customer is not necessarily at the head.
        let served = self
            .line
            .remove(customer)
            .ok_or(SimError::CustomerNotInLine { customer, at: t.0 })?;

        self.stats.total_wait_mins += t - served.arrival_time;
        self.record_sample(t, observer);

        // The departure shifted everyone up one position; if the line still
        // covers all server slots, the customer who just moved into the last
        // slot begins service now.
        if self.line.len() >= self.config.server_count {
            if let Some(next) = self.line.get(self.config.server_count - 1) {
                let done = t + self.variates.service();
                self.schedule(Event::completion(done, next.id), observer);
            }
        }
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn schedule<O: SimObserver>(&mut self, event: Event, observer: &mut O) {
        observer.on_schedule(&event);
        self.events.push(event);
    }

    fn record_sample(&mut self, t: SimTime, observer: &mut impl SimObserver) {
        let length = self.line.len();
        self.stats.queue_lengths.push(crate::QueueSample { time: t, length });
        observer.on_queue_sample(t, length);
    }
}
