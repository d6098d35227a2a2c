//! Built-in echo processor.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::ticket::Payload;

use super::config::ProcessorConfig;
use super::error::ProcessorError;
use super::traits::BatchProcessor;

/// Processor that echoes each payload back as UTF-8 text.
///
/// Exists so the service runs end-to-end out of the box; real deployments
/// register their own [`BatchProcessor`] implementation. The optional delay
/// simulates processing time, which makes the pending window observable.
pub struct EchoProcessor {
    delay: Duration,
}

impl EchoProcessor {
    /// Create an echo processor from configuration.
    pub fn new(config: &ProcessorConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
        }
    }
}

#[async_trait]
impl BatchProcessor for EchoProcessor {
    fn name(&self) -> &str {
        "echo"
    }

    async fn process(
        &self,
        batch: Vec<Payload>,
    ) -> Result<Vec<serde_json::Value>, ProcessorError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        debug!("Echoing batch of {} payloads", batch.len());
        Ok(batch
            .into_iter()
            .map(|payload| {
                let text = String::from_utf8_lossy(&payload).into_owned();
                serde_json::json!({ "echo": text })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echoes_each_position() {
        let processor = EchoProcessor::new(&ProcessorConfig::default());
        let batch = vec![b"one".to_vec(), b"two".to_vec()];

        let results = processor.process(batch).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], serde_json::json!({"echo": "one"}));
        assert_eq!(results[1], serde_json::json!({"echo": "two"}));
    }

    #[tokio::test]
    async fn test_non_utf8_payload_is_lossy_decoded() {
        let processor = EchoProcessor::new(&ProcessorConfig::default());
        let results = processor.process(vec![vec![0xff, 0xfe]]).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0]["echo"].is_string());
    }
}
