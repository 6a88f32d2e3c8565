//! # Configuration System
//!
//! Hierarchical TOML configuration for the publisher composer.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.publisher/config.toml` (global user preferences)
//! 3. **Project config** - `./.publisher/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.publisher/config.toml
//! [composer]
//! standalone = false
//! confirm_unload = true
//!
//! [uploader]
//! allowed_extensions = ["jpg", "jpeg", "png", "gif", "tiff"]
//! size_limit_bytes = 4194304
//!
//! [services.twitter]
//! max_chars = 280
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use publisher_core::config::PublisherConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PublisherConfig::load_hierarchy()?;
//!     let limit = config.service_char_limit("twitter");
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ComposerConfig, PublisherConfig, ServiceSettings, UploaderConfig};
pub use validation::validate_config;

impl PublisherConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }

    /// Character limit for a cross-posting service.
    ///
    /// Resolution order:
    /// 1. `[services.<id>] max_chars` from config
    /// 2. Built-in limit for well-known services
    ///
    /// Returns `None` when the service has no known limit.
    pub fn service_char_limit(&self, service: &str) -> Option<u32> {
        self.services
            .get(service)
            .and_then(|settings| settings.max_chars)
            .or_else(|| defaults::default_service_limit(service))
    }
}
