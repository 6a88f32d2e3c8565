//! Default values for configuration types.
//!
//! Config fields are stored as `Option` so merging can tell "unset" apart
//! from "explicitly set"; the accessors here resolve the effective value.

use crate::config::types::{ComposerConfig, UploaderConfig};

/// Extensions accepted by the photo uploader when none are configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "tiff"];

/// Upload size limit when none is configured (4 MiB).
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 4 * 1024 * 1024;

/// Built-in character limits for well-known cross-posting services.
const BUILTIN_SERVICE_LIMITS: &[(&str, u32)] = &[
    ("twitter", 280),
    ("facebook", 63206),
    ("tumblr", 4096),
    ("wordpress", 65535),
];

pub fn default_service_limit(service: &str) -> Option<u32> {
    BUILTIN_SERVICE_LIMITS
        .iter()
        .find(|(name, _)| *name == service)
        .map(|(_, limit)| *limit)
}

impl ComposerConfig {
    pub fn standalone(&self) -> bool {
        self.standalone.unwrap_or(false)
    }

    pub fn confirm_unload(&self) -> bool {
        self.confirm_unload.unwrap_or(true)
    }
}

impl UploaderConfig {
    pub fn allowed_extensions(&self) -> Vec<String> {
        match &self.allowed_extensions {
            Some(extensions) => extensions.iter().map(|e| e.to_lowercase()).collect(),
            None => DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }

    pub fn size_limit_bytes(&self) -> u64 {
        self.size_limit_bytes.unwrap_or(DEFAULT_SIZE_LIMIT_BYTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploader_defaults() {
        let config = UploaderConfig::default();
        assert_eq!(config.size_limit_bytes(), 4194304);
        assert!(config.allowed_extensions().contains(&"jpeg".to_string()));
    }

    #[test]
    fn test_configured_extensions_are_lowercased() {
        let config = UploaderConfig {
            allowed_extensions: Some(vec!["PNG".to_string(), "Webp".to_string()]),
            size_limit_bytes: None,
        };
        assert_eq!(config.allowed_extensions(), vec!["png", "webp"]);
    }

    #[test]
    fn test_confirm_unload_defaults_to_true() {
        assert!(ComposerConfig::default().confirm_unload());
        let disabled = ComposerConfig {
            standalone: None,
            confirm_unload: Some(false),
        };
        assert!(!disabled.confirm_unload());
    }

    #[test]
    fn test_standalone_defaults_to_false() {
        assert!(!ComposerConfig::default().standalone());
        let standalone = ComposerConfig {
            standalone: Some(true),
            confirm_unload: None,
        };
        assert!(standalone.standalone());
    }

    #[test]
    fn test_default_service_limit() {
        assert_eq!(default_service_limit("twitter"), Some(280));
        assert_eq!(default_service_limit("myspace"), None);
    }
}
