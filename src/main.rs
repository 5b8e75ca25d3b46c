//! LRU Replacer - demo workload driver
//!
//! Drives a shared replacer from several worker threads: every worker
//! records its own range of page ids, promotes shuffled subsets, and
//! retires a slice early. The main thread then drains the survivors in
//! eviction order and prints a JSON report.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_replacer::{Config, LruReplacer, PageId, Replacer, ReplacerStats};

// == Run Report ==
/// Summary of a full demo run, printed as JSON at the end.
#[derive(Debug, Serialize)]
struct RunReport {
    started_at: String,
    worker_threads: usize,
    tokens_recorded: u64,
    tokens_removed: u64,
    tokens_drained: u64,
    drained_unique: bool,
    elapsed_ms: u64,
    stats: ReplacerStats,
}

/// What a single worker did to the shared replacer.
struct WorkerSummary {
    recorded: u64,
    removed: u64,
}

// == Worker ==
/// Worker body: records a disjoint range of page ids, runs shuffled
/// promotion passes over half of them, then retires every 16th token.
///
/// Generic over the policy contract so the workload never depends on
/// which replacer implementation it is handed.
fn run_worker<R: Replacer<PageId>>(replacer: &R, worker: usize, config: &Config) -> WorkerSummary {
    let base = worker as u64 * config.tokens_per_worker;
    let mut tokens: Vec<PageId> = (0..config.tokens_per_worker)
        .map(|offset| PageId(base + offset))
        .collect();

    for token in &tokens {
        replacer.record_use(*token);
    }

    // Each worker derives its own seed so runs stay reproducible.
    let mut rng = StdRng::seed_from_u64(config.workload_seed.wrapping_add(worker as u64));
    for _ in 0..config.promote_passes {
        tokens.shuffle(&mut rng);
        for token in tokens.iter().take(tokens.len() / 2) {
            replacer.record_use(*token);
        }
    }

    let mut removed = 0;
    for token in tokens.iter().step_by(16) {
        if replacer.remove(token) {
            removed += 1;
        }
    }

    WorkerSummary {
        recorded: tokens.len() as u64,
        removed,
    }
}

/// Main entry point for the demo workload.
///
/// # Run Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared replacer
/// 4. Spawn workers over disjoint page-id ranges and wait for them
/// 5. Drain the surviving tokens in eviction order
/// 6. Print the run report as JSON
fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_replacer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting LRU replacer demo workload");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: worker_threads={}, tokens_per_worker={}, promote_passes={}, workload_seed={}",
        config.worker_threads, config.tokens_per_worker, config.promote_passes, config.workload_seed
    );

    let started_at = chrono::Utc::now().to_rfc3339();
    let started = Instant::now();

    let capacity = config
        .worker_threads
        .saturating_mul(config.tokens_per_worker as usize);
    let replacer = Arc::new(LruReplacer::with_capacity(capacity));
    info!("Replacer initialized with capacity for {} tokens", capacity);

    // Spawn workers over disjoint page-id ranges
    let mut handles = Vec::with_capacity(config.worker_threads);
    for worker in 0..config.worker_threads {
        let replacer = Arc::clone(&replacer);
        let config = config.clone();
        handles.push(thread::spawn(move || {
            run_worker(replacer.as_ref(), worker, &config)
        }));
    }

    let mut tokens_recorded = 0;
    let mut tokens_removed = 0;
    for handle in handles {
        let summary = handle
            .join()
            .map_err(|_| anyhow!("worker thread panicked"))?;
        tokens_recorded += summary.recorded;
        tokens_removed += summary.removed;
    }
    info!(
        "Workers finished: {} tokens recorded, {} removed early",
        tokens_recorded, tokens_removed
    );

    if let Some(victim) = replacer.peek_victim() {
        info!("Next eviction candidate: {}", victim);
    }
    let freshest: Vec<String> = replacer
        .tokens()
        .into_iter()
        .take(3)
        .map(|token| token.to_string())
        .collect();
    info!("Most recently used: {}", freshest.join(", "));

    // Drain every survivor in eviction order
    let mut drained = Vec::with_capacity(replacer.len());
    while let Some(victim) = replacer.evict_victim() {
        drained.push(victim);
    }
    let tokens_drained = drained.len() as u64;
    let unique: HashSet<PageId> = drained.iter().copied().collect();
    let drained_unique = unique.len() == drained.len();

    if tokens_drained != tokens_recorded - tokens_removed {
        warn!(
            "Drain mismatch: expected {} tokens, drained {}",
            tokens_recorded - tokens_removed,
            tokens_drained
        );
    }

    let report = RunReport {
        started_at,
        worker_threads: config.worker_threads,
        tokens_recorded,
        tokens_removed,
        tokens_drained,
        drained_unique,
        elapsed_ms: started.elapsed().as_millis() as u64,
        stats: replacer.stats(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serializing run report")?
    );

    info!("Demo workload complete");
    Ok(())
}
