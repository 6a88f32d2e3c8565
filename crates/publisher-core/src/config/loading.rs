//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! 1. **Hardcoded defaults**
//! 2. **User config** - `~/.publisher/config.toml`
//! 3. **Project config** - `./.publisher/config.toml`
//!
//! Missing files are skipped; unreadable or malformed files are errors.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{ComposerConfig, PublisherConfig, UploaderConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Directory name holding publisher config, under home or the project root.
pub const CONFIG_DIR_NAME: &str = ".publisher";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from the user and project config files.
///
/// # Errors
///
/// Returns an error if a present file cannot be parsed or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<PublisherConfig, ConfigError> {
    let user_dir = dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME));
    let project_dir = std::env::current_dir()?.join(CONFIG_DIR_NAME);
    load_hierarchy_from(user_dir.as_deref(), &project_dir)
}

/// Load and merge config files found in the given directories.
///
/// `user_dir` is `None` when no home directory is available.
pub fn load_hierarchy_from(
    user_dir: Option<&Path>,
    project_dir: &Path,
) -> Result<PublisherConfig, ConfigError> {
    let mut config = PublisherConfig::default();

    let sources = user_dir
        .into_iter()
        .chain(std::iter::once(project_dir))
        .map(|dir| dir.join(CONFIG_FILE_NAME));

    for path in sources {
        match load_config_file(&path) {
            Ok(loaded) => {
                debug!(event = "core.config.file_loaded", path = %path.display());
                config = merge_configs(config, loaded);
            }
            Err(ConfigError::ConfigNotFound { .. }) => {
                debug!(event = "core.config.file_missing", path = %path.display());
            }
            Err(e) => return Err(e),
        }
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &PathBuf) -> Result<PublisherConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("'{}': {}", path.display(), e),
    })
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields are replaced only if present in the override.
/// Service entries are merged per id with the override winning.
pub fn merge_configs(base: PublisherConfig, override_config: PublisherConfig) -> PublisherConfig {
    PublisherConfig {
        composer: ComposerConfig {
            standalone: override_config
                .composer
                .standalone
                .or(base.composer.standalone),
            confirm_unload: override_config
                .composer
                .confirm_unload
                .or(base.composer.confirm_unload),
        },
        uploader: UploaderConfig {
            allowed_extensions: override_config
                .uploader
                .allowed_extensions
                .or(base.uploader.allowed_extensions),
            size_limit_bytes: override_config
                .uploader
                .size_limit_bytes
                .or(base.uploader.size_limit_bytes),
        },
        services: {
            let mut merged = base.services;
            for (key, value) in override_config.services {
                merged.insert(key, value);
            }
            merged
        },
    }
}
