//! `SimOutputObserver<W>` — bridges `des_sim::SimObserver` to an `OutputWriter`.

use des_core::{SimConfig, SimTime};
use des_sim::{SimObserver, Statistics};

use crate::row::{QueueSampleRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams queue-length samples to any
/// [`OutputWriter`] backend as the run progresses, and writes the summary
/// row when the run ends.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    seed:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`; `config` supplies the seed
    /// recorded in the summary row.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            seed:       config.seed,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_queue_sample(&mut self, time: SimTime, length: usize) {
        let row = QueueSampleRow {
            time_mins: time.0,
            length:    length as u64,
        };
        let result = self.writer.write_queue_sample(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_time: SimTime, stats: &Statistics) {
        let row = SummaryRow {
            seed:            self.seed,
            total_customers: stats.total_customers,
            avg_wait_mins:   stats.average_wait_mins(),
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
