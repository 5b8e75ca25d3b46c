//! Configuration Module
//!
//! Handles loading the demo workload configuration from environment variables.

use std::env;

/// Demo workload parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads sharing the replacer
    pub worker_threads: usize,
    /// Tokens each worker records
    pub tokens_per_worker: u64,
    /// Shuffled promotion passes each worker runs after recording
    pub promote_passes: u32,
    /// Seed for the promotion shuffles, fixed so runs are reproducible
    pub workload_seed: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `WORKER_THREADS` - Concurrent workers (default: 4)
    /// - `TOKENS_PER_WORKER` - Tokens recorded per worker (default: 1024)
    /// - `PROMOTE_PASSES` - Promotion passes per worker (default: 2)
    /// - `WORKLOAD_SEED` - Shuffle seed (default: 42)
    pub fn from_env() -> Self {
        Self {
            worker_threads: env::var("WORKER_THREADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            tokens_per_worker: env::var("TOKENS_PER_WORKER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1024),
            promote_passes: env::var("PROMOTE_PASSES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            workload_seed: env::var("WORKLOAD_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(42),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker_threads: 4,
            tokens_per_worker: 1024,
            promote_passes: 2,
            workload_seed: 42,
        }
    }
}
