//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `DesError` via `From` impls, or keep them separate and wrap `DesError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `des-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DesError {
    #[error("configuration error: {0}")]
    Config(String),

    /// The monotonic-clock invariant was violated: an event was dispatched
    /// with a timestamp earlier than the current clock.  Always a defect in
    /// the event queue or engine, never a recoverable runtime condition.
    #[error("simulation clock moved backwards: now t={now}, next event t={next}")]
    ClockRegression { now: f64, next: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `des-*` crates.
pub type DesResult<T> = Result<T, DesError>;
