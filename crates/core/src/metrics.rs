//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Submission (tickets created)
//! - Worker loop (starts, batches, fill, duration)
//! - Results (stored outcomes)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

/// Tickets submitted total.
pub static TICKETS_SUBMITTED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "batchline_tickets_submitted_total",
        "Total tickets submitted",
    )
    .unwrap()
});

/// Worker loop starts total.
pub static WORKER_LOOP_STARTS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "batchline_worker_loop_starts_total",
        "Total worker loop starts",
    )
    .unwrap()
});

/// Batches processed total by result.
pub static BATCHES_PROCESSED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("batchline_batches_processed_total", "Total batches processed"),
        &["result"], // "ok", "failed"
    )
    .unwrap()
});

/// Results stored total by outcome.
pub static RESULTS_STORED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("batchline_results_stored_total", "Total results stored"),
        &["outcome"], // "ok", "failed"
    )
    .unwrap()
});

/// Real (unpadded) tickets per batch.
pub static BATCH_FILL: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "batchline_batch_fill",
            "Number of real tickets per processed batch",
        )
        .buckets(vec![1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0]),
    )
    .unwrap()
});

/// Batch processing duration in seconds.
pub static BATCH_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "batchline_batch_duration_seconds",
            "Duration of one processor invocation including write-back",
        )
        .buckets(vec![0.005, 0.025, 0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0]),
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(TICKETS_SUBMITTED.clone()),
        Box::new(WORKER_LOOP_STARTS.clone()),
        Box::new(BATCHES_PROCESSED.clone()),
        Box::new(RESULTS_STORED.clone()),
        Box::new(BATCH_FILL.clone()),
        Box::new(BATCH_DURATION.clone()),
    ]
}
