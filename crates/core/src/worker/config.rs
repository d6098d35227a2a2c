//! Worker configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the batch worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Number of tickets drained per loop iteration. Must be at least 1.
    ///
    /// The processor is always invoked with exactly this many inputs;
    /// undersized batches are padded by repeating the first entry.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_batch_size() -> usize {
    1
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorkerConfig::default();
        assert_eq!(config.batch_size, 1);
    }

    #[test]
    fn test_deserialize() {
        let toml = r#"
            batch_size = 8
        "#;
        let config: WorkerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.batch_size, 8);
    }
}
