//! Registry configuration types.
//!
//! `RegistryConfig` is the `bridgekit.toml` that controls which modules the
//! host registry accepts and how strictly it reports suspicious definitions.

use serde::{Deserialize, Serialize};

/// Configuration for the host-side module registry.
///
/// All fields have defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Module names the registry silently skips at registration.
    #[serde(default)]
    pub disabled_modules: Vec<String>,

    /// Log a warning when a definition declares two classes with the same name.
    #[serde(default = "default_warn_on_duplicate_classes")]
    pub warn_on_duplicate_classes: bool,
}

fn default_warn_on_duplicate_classes() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            disabled_modules: Vec::new(),
            warn_on_duplicate_classes: default_warn_on_duplicate_classes(),
        }
    }
}

impl RegistryConfig {
    pub fn is_disabled(&self, module_name: &str) -> bool {
        self.disabled_modules.iter().any(|m| m == module_name)
    }
}
