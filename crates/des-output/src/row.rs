//! Plain data row types written by output backends.

/// One queue-length observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueSampleRow {
    /// Simulated minutes from start.
    pub time_mins: f64,
    pub length:    u64,
}

/// Aggregate results of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub seed:            u64,
    pub total_customers: u64,
    /// `None` when no customers were served — written as an empty field so
    /// consumers see "undefined" rather than a bogus zero.
    pub avg_wait_mins:   Option<f64>,
}
