use publisher_core::PublisherConfig;
use tracing::warn;

/// Load the config hierarchy, falling back to defaults with a warning.
///
/// A broken config file should not stop a replay, but the user must see why
/// their settings are not applied.
pub fn load_config_with_warning() -> PublisherConfig {
    match PublisherConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            warn!(event = "cli.config_load_failed", error = %e);
            eprintln!("Warning: Could not load config: {}", e);
            eprintln!(
                "Tip: Check ~/.publisher/config.toml and ./.publisher/config.toml for errors."
            );
            PublisherConfig::default()
        }
    }
}
