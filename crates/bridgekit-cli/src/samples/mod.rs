//! Sample modules bundled with the CLI.
//!
//! `ExpoUI` declares the date/time picker and segmented picker views;
//! `ExpoLinking` exercises lifecycle listeners, activity contracts and classes.

pub mod linking;
pub mod ui;

use bridgekit_core::{Module, ModuleRegistry};
use bridgekit_types::config::RegistryConfig;
use bridgekit_types::error::RegistryError;

/// Every sample module, in registration order.
pub fn all() -> Vec<Box<dyn Module>> {
    vec![Box::new(ui::ExpoUiModule), Box::new(linking::LinkingModule)]
}

/// A registry populated with the sample modules not disabled by `config`.
pub fn registry(config: RegistryConfig) -> Result<ModuleRegistry, RegistryError> {
    let registry = ModuleRegistry::new(config);
    for module in all() {
        registry.register_module(module.as_ref())?;
    }
    Ok(registry)
}
