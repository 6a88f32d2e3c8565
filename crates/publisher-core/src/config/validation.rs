use crate::config::types::PublisherConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// - `InvalidServiceLimit` if a service sets `max_chars = 0`
/// - `InvalidConfiguration` if the uploader accepts no extensions or has a zero size limit
pub fn validate_config(config: &PublisherConfig) -> Result<(), ConfigError> {
    for (service, settings) in &config.services {
        if settings.max_chars == Some(0) {
            return Err(ConfigError::InvalidServiceLimit {
                service: service.clone(),
            });
        }
    }

    if let Some(extensions) = &config.uploader.allowed_extensions
        && extensions.iter().all(|e| e.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "uploader.allowed_extensions must name at least one extension".to_string(),
        });
    }

    if config.uploader.size_limit_bytes == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "uploader.size_limit_bytes must be greater than 0".to_string(),
        });
    }

    Ok(())
}
