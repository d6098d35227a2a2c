//! Core ticket data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Preprocessed input data for a single submitted request.
///
/// The boundary layer is responsible for turning an inbound request into
/// bytes before submission; the core never inspects the payload.
pub type Payload = Vec<u8>;

/// Status of a ticket.
///
/// `NotFound` is a pseudo-status returned for ids that were never created.
/// It is never stored, which keeps "unknown id" distinguishable from
/// "known but deleted".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Waiting to be picked up by the worker loop.
    Pending,
    /// Processed, result stored (possibly a captured failure).
    Ready,
    /// Result was explicitly deleted.
    Deleted,
    /// Id was never created.
    NotFound,
}

impl TicketStatus {
    /// Returns the status as a lowercase string for logs and API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Ready => "ready",
            TicketStatus::Deleted => "deleted",
            TicketStatus::NotFound => "not_found",
        }
    }
}

/// Outcome stored for a processed ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TicketResult {
    /// The processor produced a result for this position.
    Ok {
        /// Json-serializable business result.
        body: serde_json::Value,
    },

    /// The whole batch faulted; every ticket in it carries this marker.
    ///
    /// `status_code` is set when the processor reported an HTTP-typed
    /// failure, so the boundary layer can surface the original error kind
    /// instead of a generic 500.
    Failed {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },
}

impl TicketResult {
    /// Create a success result.
    pub fn ok(body: serde_json::Value) -> Self {
        Self::Ok { body }
    }

    /// Create a failure marker.
    pub fn failed(error: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Failed {
            error: error.into(),
            status_code,
        }
    }

    /// Returns true if this result is a captured failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A single submitted unit of work as stored in the ticket store.
#[derive(Debug, Clone)]
pub struct Ticket {
    /// Opaque unique id, generated at submission time.
    pub id: String,
    /// When the ticket was submitted.
    pub created_at: DateTime<Utc>,
    /// Caller-supplied, already-preprocessed input data.
    pub payload: Payload,
    /// Current status.
    pub status: TicketStatus,
    /// Set exactly when `status` becomes `Ready`, cleared on delete.
    pub result: Option<TicketResult>,
}
