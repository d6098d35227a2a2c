//! Name-keyed processor registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::config::ProcessorConfig;
use super::echo::EchoProcessor;
use super::error::ProcessorError;
use super::traits::BatchProcessor;

/// Constructor for a processor backend.
pub type ProcessorFactory =
    Arc<dyn Fn(&ProcessorConfig) -> Arc<dyn BatchProcessor> + Send + Sync>;

/// Registry mapping backend names to processor constructors.
///
/// Populated at startup and looked up by the string key from the
/// configuration's `processor.backend`.
#[derive(Default)]
pub struct ProcessorRegistry {
    factories: HashMap<String, ProcessorFactory>,
}

impl ProcessorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in backends registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("echo", |config| Arc::new(EchoProcessor::new(config)));
        registry
    }

    /// Register a backend under a name, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ProcessorConfig) -> Arc<dyn BatchProcessor> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("Registered processor backend: {}", name);
        self.factories.insert(name, Arc::new(factory));
    }

    /// Registered backend names.
    pub fn backends(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build the processor selected by the configuration.
    pub fn build(
        &self,
        config: &ProcessorConfig,
    ) -> Result<Arc<dyn BatchProcessor>, ProcessorError> {
        let factory = self
            .factories
            .get(&config.backend)
            .ok_or_else(|| ProcessorError::UnknownProcessor(config.backend.clone()))?;
        Ok(factory(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::Payload;
    use async_trait::async_trait;

    struct NullProcessor;

    #[async_trait]
    impl BatchProcessor for NullProcessor {
        fn name(&self) -> &str {
            "null"
        }

        async fn process(
            &self,
            batch: Vec<Payload>,
        ) -> Result<Vec<serde_json::Value>, ProcessorError> {
            Ok(vec![serde_json::Value::Null; batch.len()])
        }
    }

    #[test]
    fn test_builtins_include_echo() {
        let registry = ProcessorRegistry::with_builtins();
        let config = ProcessorConfig::default();
        let processor = registry.build(&config).unwrap();
        assert_eq!(processor.name(), "echo");
    }

    #[test]
    fn test_unknown_backend_is_an_error() {
        let registry = ProcessorRegistry::with_builtins();
        let config = ProcessorConfig {
            backend: "does-not-exist".to_string(),
            ..Default::default()
        };
        let err = match registry.build(&config) {
            Ok(_) => panic!("expected build to fail for unknown backend"),
            Err(e) => e,
        };
        assert!(matches!(err, ProcessorError::UnknownProcessor(_)));
    }

    #[test]
    fn test_register_custom_backend() {
        let mut registry = ProcessorRegistry::new();
        registry.register("null", |_| Arc::new(NullProcessor));

        let config = ProcessorConfig {
            backend: "null".to_string(),
            ..Default::default()
        };
        let processor = registry.build(&config).unwrap();
        assert_eq!(processor.name(), "null");
        assert_eq!(registry.backends(), vec!["null"]);
    }
}
