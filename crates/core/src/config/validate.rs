use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Worker batch size is at least 1
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Worker validation
    if config.worker.batch_size == 0 {
        return Err(ConfigError::ValidationError(
            "worker.batch_size must be at least 1".to_string(),
        ));
    }

    Ok(())
}
