//! Configuration type definitions for the publisher.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [composer]
//! standalone = true
//!
//! [uploader]
//! size_limit_bytes = 1048576
//!
//! [services.tumblr]
//! max_chars = 1000
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.publisher/config.toml`
/// 2. Project config: `./.publisher/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PublisherConfig {
    /// Composer panel behavior
    #[serde(default)]
    pub composer: ComposerConfig,

    /// Photo uploader restrictions
    #[serde(default)]
    pub uploader: UploaderConfig,

    /// Per-service cross-posting settings
    #[serde(default)]
    pub services: HashMap<String, ServiceSettings>,
}

/// Composer panel configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ComposerConfig {
    /// Standalone composers hide the close and preview buttons.
    /// Default: false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standalone: Option<bool>,

    /// Ask for confirmation before leaving with a submittable draft.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_unload: Option<bool>,
}

/// Photo uploader configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UploaderConfig {
    /// Accepted file extensions, lowercase without the dot.
    /// Default: jpg, jpeg, png, gif, tiff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_extensions: Option<Vec<String>>,

    /// Maximum upload size in bytes.
    /// Default: 4 MiB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_limit_bytes: Option<u64>,
}

/// Per-service settings used in `[services.<id>]` sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ServiceSettings {
    /// Maximum post length accepted by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
}
