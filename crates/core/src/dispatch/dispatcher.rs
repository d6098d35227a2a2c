//! Request dispatcher implementation.

use std::sync::Arc;

use tracing::debug;

use crate::metrics;
use crate::ticket::{Payload, TicketResult, TicketStatus, TicketStore};
use crate::worker::{BatchWorker, WorkerStatus};

/// The seam the boundary layer calls: enqueue new work, poll for results.
///
/// Submission never blocks on processing; it creates the ticket, makes sure
/// a worker loop is running, and returns the id immediately. Retrieval is a
/// pure poll against the ticket store.
pub struct RequestDispatcher {
    ticket_store: Arc<dyn TicketStore>,
    worker: Arc<BatchWorker>,
}

impl RequestDispatcher {
    /// Create a new dispatcher over a store and its worker.
    pub fn new(ticket_store: Arc<dyn TicketStore>, worker: Arc<BatchWorker>) -> Self {
        Self {
            ticket_store,
            worker,
        }
    }

    /// Enqueue a preprocessed payload and return its ticket id.
    ///
    /// Lazily starts the worker loop; the atomic try-start guarantees at
    /// most one loop even under concurrent submissions.
    pub fn handle_incoming(&self, payload: Payload) -> String {
        let id = self.ticket_store.create(payload);
        metrics::TICKETS_SUBMITTED.inc();

        if self.worker.try_start() {
            debug!("Worker loop was not running, started it");
        } else {
            debug!("Worker loop already running");
        }

        id
    }

    /// Current status and stored result for a ticket.
    ///
    /// Callable at any time: unknown ids yield `(NotFound, None)`, tickets
    /// not yet processed yield `(Pending, None)`. Never blocks.
    pub fn result(&self, id: &str) -> (TicketStatus, Option<TicketResult>) {
        self.ticket_store.result(id)
    }

    /// Current status for a ticket, without the result payload.
    pub fn status(&self, id: &str) -> TicketStatus {
        self.ticket_store.status(id)
    }

    /// Delete a stored result. Returns `false` if the ticket is unknown or
    /// has no stored result to delete.
    pub fn delete_result(&self, id: &str) -> bool {
        self.ticket_store.delete(id)
    }

    /// Current worker status.
    pub fn worker_status(&self) -> WorkerStatus {
        self.worker.status()
    }
}
