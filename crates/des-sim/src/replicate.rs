//! Replication batches: many independent seeded runs of one configuration.
//!
//! Each replication owns a fully independent engine, event queue, and RNG —
//! no shared mutable state — so the batch parallelises trivially.  With the
//! `parallel` Cargo feature the runs execute on Rayon's thread pool; results
//! are identical either way because replication `i` always uses the derived
//! seed `config.seed + i`.

use des_core::{SimConfig, SimRng};

use crate::{ExponentialVariates, NoopObserver, Sim, SimResult, Statistics};

/// Run `runs` independent replications of `config` and return their
/// statistics in replication order.
pub fn run_replications(config: &SimConfig, runs: usize) -> SimResult<Vec<Statistics>> {
    config.validate()?;

    #[cfg(not(feature = "parallel"))]
    {
        (0..runs).map(|i| run_one(config, i as u64)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..runs)
            .into_par_iter()
            .map(|i| run_one(config, i as u64))
            .collect()
    }
}

fn run_one(config: &SimConfig, index: u64) -> SimResult<Statistics> {
    let rng = SimRng::for_replication(config.seed, index);
    let variates = ExponentialVariates::new(
        rng,
        config.mean_interarrival_mins,
        config.mean_service_mins,
    );
    Sim::with_variates(config.clone(), variates)?.run(&mut NoopObserver)
}

/// Cross-replication aggregate of a batch's statistics.
#[derive(Clone, PartialEq, Debug)]
pub struct ReplicationSummary {
    pub runs: usize,

    /// Customers served summed over all replications.
    pub total_customers: u64,

    /// Mean of the per-replication average waits, over replications that
    /// served at least one customer.  `None` if no replication served anyone.
    pub mean_avg_wait_mins: Option<f64>,
}

impl ReplicationSummary {
    pub fn from_runs(runs: &[Statistics]) -> Self {
        let total_customers = runs.iter().map(|s| s.total_customers).sum();

        let avgs: Vec<f64> = runs.iter().filter_map(Statistics::average_wait_mins).collect();
        let mean_avg_wait_mins = if avgs.is_empty() {
            None
        } else {
            Some(avgs.iter().sum::<f64>() / avgs.len() as f64)
        };

        Self {
            runs: runs.len(),
            total_customers,
            mean_avg_wait_mins,
        }
    }
}
