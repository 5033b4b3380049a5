//! coffee-shop — demo scenario for the rust_des framework.
//!
//! Simulates a morning at a two-barista coffee shop: customers arrive every
//! 4 minutes on average, each order takes 3 minutes on average, and the shop
//! is open for 60 minutes.  Prints the run report with a queue-length chart
//! and writes `queue_lengths.csv` / `summary.csv`, then runs a replication
//! batch for a less noisy average.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use des_core::SimConfig;
use des_output::{report, CsvWriter, SimOutputObserver};
use des_sim::{run_replications, ReplicationSummary, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const OPEN_MINS:             f64   = 60.0;
const MEAN_SERVICE_MINS:     f64   = 3.0;
const MEAN_INTERARRIVAL_MINS: f64  = 4.0;
const BARISTAS:              usize = 2;
const SEED:                  u64   = 42;
const REPLICATIONS:          usize = 20;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== coffee-shop — rust_des discrete-event simulation ===");
    println!(
        "Open: {OPEN_MINS} min  |  Baristas: {BARISTAS}  |  Service: {MEAN_SERVICE_MINS} min  |  \
         Arrivals: every {MEAN_INTERARRIVAL_MINS} min  |  Seed: {SEED}"
    );
    println!();

    let config = SimConfig {
        duration_mins:          OPEN_MINS,
        mean_service_mins:      MEAN_SERVICE_MINS,
        mean_interarrival_mins: MEAN_INTERARRIVAL_MINS,
        server_count:           BARISTAS,
        seed:                   SEED,
    };

    // 1. Single run, streaming CSV output as events are handled.
    std::fs::create_dir_all("output/coffee-shop")?;
    let writer = CsvWriter::new(Path::new("output/coffee-shop"))?;
    let mut obs = SimOutputObserver::new(writer, &config);

    let t0 = Instant::now();
    let stats = Sim::new(config.clone())?.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!("{}", report::render_report(&stats));
    println!("{}", report::render_queue_chart(&stats.queue_lengths, 60, 8));
    println!("Run completed in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  queue_lengths.csv : {} rows", stats.queue_lengths.len());
    println!("  summary.csv       : 1 row");
    println!();

    // 2. Replication batch: independent seeds, same configuration.
    let runs = run_replications(&config, REPLICATIONS)?;
    let summary = ReplicationSummary::from_runs(&runs);
    println!("Replications: {} runs", summary.runs);
    println!("  total customers served : {}", summary.total_customers);
    match summary.mean_avg_wait_mins {
        Some(mins) => println!("  mean average wait      : {mins:.2} minutes"),
        None       => println!("  mean average wait      : undefined (no customers served)"),
    }

    Ok(())
}
