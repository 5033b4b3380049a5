//! The duration-sampling seam between the engine and its random source.
//!
//! The engine only ever asks two questions: "how long until the next
//! arrival?" and "how long will this service take?".  Putting those behind a
//! trait keeps the engine deterministic-by-construction and lets tests script
//! exact durations (including degenerate ones such as an infinite
//! interarrival gap, which the horizon check handles naturally) without
//! loosening configuration validation.

use des_core::{SimConfig, SimRng};

/// Source of interarrival and service durations, in minutes.
///
/// Implementations may return `f64::INFINITY` to mean "never" — the resulting
/// event lands past any finite horizon and is not processed.
pub trait VariateSource {
    /// Duration until the next customer arrives.
    fn interarrival(&mut self) -> f64;

    /// Duration of one customer's service.
    fn service(&mut self) -> f64;
}

/// The production source: exponentially distributed durations drawn from a
/// single seeded RNG stream with the configured means.
pub struct ExponentialVariates {
    rng:               SimRng,
    mean_interarrival: f64,
    mean_service:      f64,
}

impl ExponentialVariates {
    /// Precondition: both means are finite and positive (guaranteed for
    /// validated configs).
    pub fn new(rng: SimRng, mean_interarrival: f64, mean_service: f64) -> Self {
        Self { rng, mean_interarrival, mean_service }
    }

    /// Build from a validated config, seeding from `config.seed`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            SimRng::new(config.seed),
            config.mean_interarrival_mins,
            config.mean_service_mins,
        )
    }
}

impl VariateSource for ExponentialVariates {
    fn interarrival(&mut self) -> f64 {
        self.rng.exponential(self.mean_interarrival)
    }

    fn service(&mut self) -> f64 {
        self.rng.exponential(self.mean_service)
    }
}
