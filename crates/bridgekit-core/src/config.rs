//! Registry configuration loader.
//!
//! Reads `bridgekit.toml` from a directory and deserializes it into
//! [`RegistryConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use bridgekit_types::config::RegistryConfig;

pub const CONFIG_FILE_NAME: &str = "bridgekit.toml";

/// Load registry configuration from `{dir}/bridgekit.toml`.
///
/// - If the file does not exist, returns [`RegistryConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
pub async fn load_registry_config(dir: &Path) -> RegistryConfig {
    let config_path = dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE_NAME} found at {}, using defaults", config_path.display());
            return RegistryConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return RegistryConfig::default();
        }
    };

    match toml::from_str::<RegistryConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            RegistryConfig::default()
        }
    }
}
