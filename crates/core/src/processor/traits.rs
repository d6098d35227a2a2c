//! Trait definition for batch processors.

use async_trait::async_trait;

use crate::ticket::Payload;

use super::error::ProcessorError;

/// A processor invoked once per batch by the worker loop.
///
/// The input list always has exactly the configured batch size; undersized
/// batches are padded by the caller before invocation. On success the output
/// must contain one result per input position; only the prefix matching the
/// real (unpadded) ticket count is consumed. On failure the whole batch is
/// marked failed, the loop keeps running.
#[async_trait]
pub trait BatchProcessor: Send + Sync {
    /// Returns the name of this processor implementation.
    fn name(&self) -> &str;

    /// Processes a full batch of payloads.
    async fn process(
        &self,
        batch: Vec<Payload>,
    ) -> Result<Vec<serde_json::Value>, ProcessorError>;
}
