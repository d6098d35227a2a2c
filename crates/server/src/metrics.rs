//! Prometheus metrics for the batchline server.
//!
//! Combines the core metrics with gauges collected dynamically from the
//! application state at scrape time.

use once_cell::sync::Lazy;
use prometheus::{Encoder, IntGauge, IntGaugeVec, Opts, Registry, TextEncoder};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Worker running state (1 = running, 0 = stopped).
pub static WORKER_RUNNING: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "batchline_worker_running",
        "Whether the worker loop is running (1) or stopped (0)",
    )
    .unwrap()
});

/// Tickets by current status (collected dynamically).
pub static TICKETS_BY_STATUS: Lazy<IntGaugeVec> = Lazy::new(|| {
    IntGaugeVec::new(
        Opts::new(
            "batchline_tickets_by_status",
            "Current ticket count by status",
        ),
        &["status"],
    )
    .unwrap()
});

fn register_metrics(registry: &Registry) {
    registry.register(Box::new(WORKER_RUNNING.clone())).unwrap();
    registry
        .register(Box::new(TICKETS_BY_STATUS.clone()))
        .unwrap();

    // Core metrics (submission, worker loop, results)
    for metric in batchline_core::metrics::all_metrics() {
        registry.register(metric).unwrap();
    }
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so gauges reflect the live worker and store.
pub fn collect_dynamic_metrics(state: &crate::state::AppState) {
    let status = state.dispatcher().worker_status();
    WORKER_RUNNING.set(if status.running { 1 } else { 0 });
    TICKETS_BY_STATUS
        .with_label_values(&["pending"])
        .set(status.pending as i64);
    TICKETS_BY_STATUS
        .with_label_values(&["ready"])
        .set(status.ready as i64);
}
