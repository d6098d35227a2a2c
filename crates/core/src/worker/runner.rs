//! Batch worker implementation.
//!
//! Lifecycle is `Stopped → Running → Stopped`: `try_start` claims the
//! running flag with a compare-and-swap and spawns one task that owns the
//! loop until the pending queue is drained. There is no external stop
//! signal; the façade simply starts a fresh loop the next time a submission
//! finds the worker stopped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::metrics;
use crate::processor::BatchProcessor;
use crate::ticket::{Payload, TicketResult, TicketStore};

use super::config::WorkerConfig;
use super::types::WorkerStatus;

/// The batch worker - drains pending tickets and invokes the processor.
pub struct BatchWorker {
    config: WorkerConfig,
    ticket_store: Arc<dyn TicketStore>,
    processor: Arc<dyn BatchProcessor>,
    running: Arc<AtomicBool>,
}

impl BatchWorker {
    /// Create a new worker. The loop is not started until [`try_start`].
    ///
    /// [`try_start`]: BatchWorker::try_start
    pub fn new(
        config: WorkerConfig,
        ticket_store: Arc<dyn TicketStore>,
        processor: Arc<dyn BatchProcessor>,
    ) -> Self {
        Self {
            config,
            ticket_store,
            processor,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a worker loop is currently running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start a worker loop if none is running.
    ///
    /// The transition is a compare-and-swap on the running flag, so two
    /// submissions arriving concurrently while the worker is stopped spawn
    /// exactly one loop. Returns whether this call started one.
    pub fn try_start(&self) -> bool {
        if self
            .running
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Worker loop already running");
            return false;
        }

        info!(
            "Starting worker loop (batch_size {})",
            self.config.batch_size
        );
        metrics::WORKER_LOOP_STARTS.inc();

        let running = Arc::clone(&self.running);
        let ticket_store = Arc::clone(&self.ticket_store);
        let processor = Arc::clone(&self.processor);
        let batch_size = self.config.batch_size;

        tokio::spawn(async move {
            Self::drain(ticket_store, processor, batch_size, running).await;
        });

        true
    }

    /// Current worker status.
    pub fn status(&self) -> WorkerStatus {
        let counts = self.ticket_store.counts();
        WorkerStatus {
            running: self.is_running(),
            pending: counts.pending,
            ready: counts.ready,
        }
    }

    /// The drain loop. Runs until the pending queue is empty, then releases
    /// the running flag and exits.
    async fn drain(
        ticket_store: Arc<dyn TicketStore>,
        processor: Arc<dyn BatchProcessor>,
        batch_size: usize,
        running: Arc<AtomicBool>,
    ) {
        debug!("Worker loop started");

        loop {
            let ids = ticket_store.next_pending(batch_size);

            if ids.is_empty() {
                running.store(false, Ordering::SeqCst);
                // A submission can slip in between the empty scan and the
                // flag flip above; its try_start saw "running" and did not
                // spawn a loop. Rescan and reclaim the flag so that ticket
                // is not stranded.
                if ticket_store.next_pending(1).is_empty()
                    || running
                        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                        .is_err()
                {
                    break;
                }
                continue;
            }

            debug!("Extracted batch of {} pending tickets", ids.len());
            Self::process_batch(
                ticket_store.as_ref(),
                processor.as_ref(),
                &ids,
                batch_size,
            )
            .await;
        }

        info!("Worker loop stopped, pending queue drained");
    }

    /// Run the processor for one batch and write results back.
    ///
    /// `ids` holds the real (unpadded) ticket ids; the processor input is
    /// padded to `batch_size` by repeating the first id's payload. Results
    /// are written back only for the real ids.
    async fn process_batch(
        ticket_store: &dyn TicketStore,
        processor: &dyn BatchProcessor,
        ids: &[String],
        batch_size: usize,
    ) {
        let started = Instant::now();

        let mut batch_ids = ids.to_vec();
        while batch_ids.len() < batch_size {
            batch_ids.push(ids[0].clone());
        }
        if batch_ids.len() > ids.len() {
            debug!(
                "Padded batch of {} tickets to batch size {}",
                ids.len(),
                batch_size
            );
        }

        let payloads: Vec<Payload> = batch_ids
            .iter()
            .map(|id| ticket_store.payload(id).unwrap_or_default())
            .collect();

        let results: Vec<TicketResult> = match processor.process(payloads).await {
            Ok(results) => {
                if results.len() < ids.len() {
                    warn!(
                        "Processor returned {} results for a batch of {}",
                        results.len(),
                        batch_size
                    );
                }
                metrics::BATCHES_PROCESSED.with_label_values(&["ok"]).inc();
                results.into_iter().map(TicketResult::ok).collect()
            }
            Err(e) => {
                // The processor cannot tell which payload was at fault, so
                // every ticket in the failed batch gets the same marker.
                error!("Batch processing failed: {}", e);
                metrics::BATCHES_PROCESSED
                    .with_label_values(&["failed"])
                    .inc();
                let marker = TicketResult::failed(e.to_string(), e.status_code());
                vec![marker; batch_size]
            }
        };

        // zip stops at the shorter side: only the unpadded prefix of the
        // results is consumed.
        for (id, result) in ids.iter().zip(results) {
            let outcome = if result.is_failed() { "failed" } else { "ok" };
            if ticket_store.store_result(id, result) {
                metrics::RESULTS_STORED.with_label_values(&[outcome]).inc();
            } else {
                warn!("Dropping result for unknown ticket {}", id);
            }
        }

        metrics::BATCH_FILL.observe(ids.len() as f64);
        metrics::BATCH_DURATION.observe(started.elapsed().as_secs_f64());
    }
}
