//! Ticket storage trait.

use crate::ticket::{Payload, TicketResult, TicketStatus};

/// Per-status counts over a store, used for diagnostics and metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub total: usize,
    pub pending: usize,
    pub ready: usize,
    pub deleted: usize,
}

/// Trait for ticket storage backends.
///
/// The store is the single shared mutable resource of the system: it is
/// written by many submitter threads and by the one worker loop, so every
/// implementation must be internally synchronized.
///
/// Operations on unknown ids are signaled through sentinel returns
/// (`TicketStatus::NotFound`, `None`, `false`) rather than errors, which
/// keeps the façade's handling uniform.
pub trait TicketStore: Send + Sync {
    /// Store a new payload under a freshly generated unique id and return
    /// the id. The ticket starts out `Pending`. Never fails.
    fn create(&self, payload: Payload) -> String;

    /// The original submitted payload, for batch assembly. `None` if the id
    /// is unknown.
    fn payload(&self, id: &str) -> Option<Payload>;

    /// Current status and stored result. `(NotFound, None)` for unknown ids;
    /// the result is `Some` exactly while the status is `Ready`.
    fn result(&self, id: &str) -> (TicketStatus, Option<TicketResult>);

    /// Current status without the result payload, for diagnostics.
    fn status(&self, id: &str) -> TicketStatus;

    /// Delete the stored result: `Ready → Deleted`, clearing the result.
    ///
    /// Any other transition is illegal, so this is a no-op returning `false`
    /// for unknown ids and for tickets that are not `Ready`. In particular a
    /// `Pending` ticket cannot be deleted out from under the worker loop.
    fn delete(&self, id: &str) -> bool;

    /// Up to `n` ids of currently `Pending` tickets, in insertion order.
    /// Returns fewer (possibly zero) if not enough are pending. Never
    /// blocks, never pads.
    fn next_pending(&self, n: usize) -> Vec<String>;

    /// Store a result and mark the ticket `Ready`. Returns `false` without
    /// mutating anything if the id is unknown.
    fn store_result(&self, id: &str, result: TicketResult) -> bool;

    /// Per-status counts over all tickets ever created on this store.
    fn counts(&self) -> StoreCounts;
}
