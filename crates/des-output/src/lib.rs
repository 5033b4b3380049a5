//! `des-output` — simulation output for the rust_des framework.
//!
//! The simulation core hands its results off as an immutable `Statistics`
//! snapshot; everything here is a consumer of that interface.  Two consumers
//! are provided:
//!
//! - **CSV files** (`queue_lengths.csv`, `summary.csv`) behind the
//!   [`OutputWriter`] trait, streamed during the run by
//!   [`SimOutputObserver`], which implements `des_sim::SimObserver`.
//! - **Console report** — totals, average wait, and a time-vs-queue-length
//!   ASCII chart, rendered from the final snapshot by [`report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use des_output::{CsvWriter, SimOutputObserver, report};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, &config);
//! let stats = Sim::new(config)?.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! println!("{}", report::render_report(&stats));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{QueueSampleRow, SummaryRow};
pub use writer::OutputWriter;
