//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous, real-valued quantity in simulated minutes.  Unlike a
//! tick-stepped simulation, a discrete-event loop jumps the clock straight to
//! each event's timestamp, so the canonical time unit is an `f64` wrapped in
//! `SimTime`.  `SimClock` enforces the one invariant that makes the whole
//! event loop sound: the clock never moves backwards.
//!
//! All durations (means, horizon) are expressed in the same minute unit; the
//! framework itself is agnostic to what a "minute" means.

use std::fmt;

use crate::{DesError, DesResult};

// ── SimTime ──────────────────────────────────────────────────────────────────

/// An absolute point in simulated time, in minutes from simulation start.
///
/// `f64` has 52 mantissa bits, so timestamp arithmetic stays exact far beyond
/// any plausible horizon.  Ordering helpers go through [`f64::total_cmp`] so
/// collections can hold `SimTime` without `NaN` pitfalls.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// Return the time `mins` minutes after `self`.
    #[inline]
    pub fn offset(self, mins: f64) -> SimTime {
        SimTime(self.0 + mins)
    }

    /// Minutes elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> f64 {
        self.0 - earlier.0
    }

    /// Total order over timestamps (IEEE 754 `totalOrder`).
    #[inline]
    pub fn total_cmp(&self, other: &SimTime) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.2}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The monotonic simulation clock.
///
/// Advanced only when an event is dispatched; a dispatch time earlier than
/// `now` means the event queue's ordering invariant has been broken and is
/// reported as a fatal error rather than silently rewinding time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    now: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self { now: SimTime::ZERO }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Advance the clock to `t`.
    ///
    /// Fails if `t` is earlier than the current time — the monotonic-clock
    /// invariant never tolerates regression.
    pub fn advance_to(&mut self, t: SimTime) -> DesResult<()> {
        if t.0 < self.now.0 {
            return Err(DesError::ClockRegression {
                now:  self.now.0,
                next: t.0,
            });
        }
        self.now = t;
        Ok(())
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.now)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built in the application crate (or loaded from TOML/JSON with the
/// `serde` feature) and validated once before the run starts — configuration
/// errors fail fast at construction, never mid-simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulation horizon in minutes.  Events past this time are not
    /// processed.  `0.0` is legal and yields an empty run.
    pub duration_mins: f64,

    /// Mean service duration per customer, minutes.  Must be finite and > 0.
    pub mean_service_mins: f64,

    /// Mean time between successive arrivals, minutes.  Must be finite and > 0.
    pub mean_interarrival_mins: f64,

    /// Number of identical, interchangeable servers (baristas).  Must be ≥ 1.
    pub server_count: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl SimConfig {
    /// Check every field against its stated domain.
    ///
    /// Returns the first violation found as [`DesError::Config`].
    pub fn validate(&self) -> DesResult<()> {
        if !self.duration_mins.is_finite() || self.duration_mins < 0.0 {
            return Err(DesError::Config(format!(
                "duration_mins must be finite and non-negative, got {}",
                self.duration_mins
            )));
        }
        if !self.mean_service_mins.is_finite() || self.mean_service_mins <= 0.0 {
            return Err(DesError::Config(format!(
                "mean_service_mins must be finite and positive, got {}",
                self.mean_service_mins
            )));
        }
        if !self.mean_interarrival_mins.is_finite() || self.mean_interarrival_mins <= 0.0 {
            return Err(DesError::Config(format!(
                "mean_interarrival_mins must be finite and positive, got {}",
                self.mean_interarrival_mins
            )));
        }
        if self.server_count == 0 {
            return Err(DesError::Config(
                "server_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The simulation horizon as an absolute timestamp.
    #[inline]
    pub fn horizon(&self) -> SimTime {
        SimTime(self.duration_mins)
    }
}
