//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, QueueSampleRow, SummaryRow};

/// Sink for simulation output rows.
///
/// Driven by [`SimOutputObserver`][crate::SimOutputObserver], whose callbacks
/// have no return value — errors are stored there and retrieved after the run
/// with `take_error`.
pub trait OutputWriter {
    /// Append one queue-length sample.
    fn write_queue_sample(&mut self, row: &QueueSampleRow) -> OutputResult<()>;

    /// Write the run's summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
