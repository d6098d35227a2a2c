//! Processor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the processor backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Registry key of the processor implementation to run.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Artificial per-batch delay in milliseconds.
    ///
    /// Only honored by backends that simulate work (e.g. "echo"); useful for
    /// observing the pending window in deployments and integration tests.
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_backend() -> String {
    "echo".to_string()
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            delay_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.backend, "echo");
        assert_eq!(config.delay_ms, 0);
    }

    #[test]
    fn test_deserialize_minimal() {
        let toml = r#"
            backend = "echo"
        "#;
        let config: ProcessorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.backend, "echo");
        assert_eq!(config.delay_ms, 0);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            backend = "echo"
            delay_ms = 250
        "#;
        let config: ProcessorConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.delay_ms, 250);
    }
}
