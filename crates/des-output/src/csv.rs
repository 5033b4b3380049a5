//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `queue_lengths.csv` — one row per queue-length sample
//! - `summary.csv` — one row per run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, QueueSampleRow, SummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    samples:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join("queue_lengths.csv"))?;
        samples.write_record(["time_mins", "queue_length"])?;

        let mut summaries = Writer::from_path(dir.join("summary.csv"))?;
        summaries.write_record(["seed", "total_customers", "avg_wait_mins"])?;

        Ok(Self {
            samples,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_queue_sample(&mut self, row: &QueueSampleRow) -> OutputResult<()> {
        self.samples
            .write_record(&[row.time_mins.to_string(), row.length.to_string()])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        // An undefined average becomes an empty field, not a zero.
        let avg = row.avg_wait_mins.map(|v| v.to_string()).unwrap_or_default();
        self.summaries.write_record(&[
            row.seed.to_string(),
            row.total_customers.to_string(),
            avg,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
