//! `des-sim` — discrete-event engine for the rust_des framework.
//!
//! # Event loop
//!
//! ```text
//! schedule first Arrival at exponential(mean_interarrival)
//! while let Some(event) = queue.pop_before(horizon):
//!   ① Advance  — clock jumps to event.time (regression is a fatal defect).
//!   ② Dispatch — Arrival    → new customer joins the line tail; if a server
//!                             slot is free, their Completion is scheduled;
//!                             the next Arrival is always scheduled.
//!                Completion → customer leaves the line (by identity); the
//!                             customer now at the freed slot, if any, gets
//!                             their Completion scheduled.
//!   ③ Record   — each handler appends a queue-length sample after mutating
//!                the line, and updates the aggregate totals.
//! ```
//!
//! The loop ends when the queue empties (normal early termination) or when
//! the earliest pending event lies past the horizon; that in-flight event is
//! not processed.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | Runs replication batches on Rayon's thread pool.     |
//! | `serde`    | Serde derives on `Statistics` and `QueueSample`.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use des_core::SimConfig;
//! use des_sim::{NoopObserver, Sim};
//!
//! let config = SimConfig {
//!     duration_mins:          60.0,
//!     mean_service_mins:      3.0,
//!     mean_interarrival_mins: 4.0,
//!     server_count:           2,
//!     seed:                   42,
//! };
//! let stats = Sim::new(config)?.run(&mut NoopObserver)?;
//! println!("{} customers served", stats.total_customers);
//! ```

pub mod error;
pub mod event;
pub mod observer;
pub mod queue;
pub mod replicate;
pub mod sim;
pub mod state;
pub mod stats;
pub mod variate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SimError, SimResult};
pub use event::{Event, EventKind};
pub use observer::{NoopObserver, SimObserver};
pub use queue::EventQueue;
pub use replicate::{run_replications, ReplicationSummary};
pub use sim::Sim;
pub use state::{Customer, WaitingLine};
pub use stats::{QueueSample, Statistics};
pub use variate::{ExponentialVariates, VariateSource};
