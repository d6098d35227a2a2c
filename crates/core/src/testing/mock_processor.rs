//! Mock batch processor for testing.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::processor::{BatchProcessor, ProcessorError};
use crate::ticket::Payload;

/// Handler deciding the outcome of one `process` call.
pub type BatchHandler =
    dyn Fn(&[Payload]) -> Result<Vec<serde_json::Value>, ProcessorError> + Send + Sync;

/// A recorded batch invocation for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedBatch {
    /// The padded payload list the processor received.
    pub payloads: Vec<Payload>,
    /// Whether this invocation succeeded.
    pub success: bool,
}

/// Mock implementation of the [`BatchProcessor`] trait.
///
/// Provides controllable behavior for testing:
/// - Record every batch for assertions (including padding shape)
/// - Fail the next N invocations
/// - Delegate outcomes to a custom handler
/// - Simulate processing time
///
/// The default behavior echoes each payload back as a UTF-8 string.
pub struct MockBatchProcessor {
    /// Recorded invocations.
    batches: Arc<RwLock<Vec<RecordedBatch>>>,
    /// Number of upcoming invocations that will fail.
    fail_next: Arc<RwLock<usize>>,
    /// Custom handler, takes precedence over the default echo behavior.
    handler: Arc<RwLock<Option<Box<BatchHandler>>>>,
    /// Simulated processing time per batch.
    delay: Arc<RwLock<Duration>>,
}

impl Default for MockBatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBatchProcessor {
    /// Create a new mock processor.
    pub fn new() -> Self {
        Self {
            batches: Arc::new(RwLock::new(Vec::new())),
            fail_next: Arc::new(RwLock::new(0)),
            handler: Arc::new(RwLock::new(None)),
            delay: Arc::new(RwLock::new(Duration::ZERO)),
        }
    }

    /// Get all recorded batches.
    pub async fn recorded_batches(&self) -> Vec<RecordedBatch> {
        self.batches.read().await.clone()
    }

    /// Get the number of invocations so far.
    pub async fn batch_count(&self) -> usize {
        self.batches.read().await.len()
    }

    /// Fail the next `n` invocations with a generic processing error.
    pub async fn fail_next(&self, n: usize) {
        *self.fail_next.write().await = n;
    }

    /// Set a handler that decides the outcome of every invocation.
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&[Payload]) -> Result<Vec<serde_json::Value>, ProcessorError>
            + Send
            + Sync
            + 'static,
    {
        *self.handler.write().await = Some(Box::new(handler));
    }

    /// Set the simulated processing time per batch.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = delay;
    }
}

#[async_trait]
impl BatchProcessor for MockBatchProcessor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn process(
        &self,
        batch: Vec<Payload>,
    ) -> Result<Vec<serde_json::Value>, ProcessorError> {
        let delay = *self.delay.read().await;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        {
            let mut fail_next = self.fail_next.write().await;
            if *fail_next > 0 {
                *fail_next -= 1;
                self.batches.write().await.push(RecordedBatch {
                    payloads: batch,
                    success: false,
                });
                return Err(ProcessorError::Failed(
                    "injected batch failure".to_string(),
                ));
            }
        }

        let result = match self.handler.read().await.as_ref() {
            Some(handler) => handler(&batch),
            None => Ok(batch
                .iter()
                .map(|p| serde_json::Value::String(String::from_utf8_lossy(p).into_owned()))
                .collect()),
        };

        self.batches.write().await.push(RecordedBatch {
            payloads: batch,
            success: result.is_ok(),
        });

        result
    }
}
