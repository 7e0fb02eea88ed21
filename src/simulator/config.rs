//! Simulation configuration.

use crate::core::constants::{AUTO_RUN_MAX_JOINERS, AUTO_RUN_MIN_JOINERS, DEFAULT_INVESTMENT};

/// Configuration for a batch of headless simulation runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent schemes to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Round cap per run; a scheme that survives this long counts as "survived"
    pub max_rounds_per_run: u32,

    /// Contribution per joiner
    pub investment_amount: f64,

    /// Joiners drawn per round, inclusive range
    pub min_joiners: u32,
    pub max_joiners: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_rounds_per_run: 200,
            investment_amount: DEFAULT_INVESTMENT,
            min_joiners: AUTO_RUN_MIN_JOINERS,
            max_joiners: AUTO_RUN_MAX_JOINERS,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for tests.
    pub fn smoke_test(seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            max_rounds_per_run: 100,
            verbosity: 0,
            ..Default::default()
        }
    }
}
