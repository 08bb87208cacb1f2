//! Host-side module registry.
//!
//! Holds finalized module definitions by name and drives their lifecycle:
//! posting events to listeners and running activity-contract callbacks after
//! creation.

use std::collections::HashSet;
use std::sync::Arc;

use bridgekit_types::config::RegistryConfig;
use bridgekit_types::error::RegistryError;
use bridgekit_types::event::{EventName, PayloadShape};
use bridgekit_types::manifest::ModuleManifest;
use bridgekit_types::payload::{Activity, ActivityResultPayload, Intent};
use dashmap::{DashMap, DashSet};
use dashmap::mapref::entry::Entry;

use crate::activity_result::ActivityResultCaller;
use crate::listener::EventListener;
use crate::module::{Module, ModuleDefinition};

/// Outcome of [`ModuleRegistry::create_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateSummary {
    /// Create listeners invoked.
    pub listeners: usize,
    /// Modules whose contracts callback ran during this pass.
    pub contracts: usize,
}

/// Registry of module definitions, indexed by module name.
pub struct ModuleRegistry {
    modules: DashMap<String, Arc<ModuleDefinition>>,
    /// Modules whose contracts callback has already run.
    contracts_registered: DashSet<String>,
    config: RegistryConfig,
    caller: ActivityResultCaller,
}

impl ModuleRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            modules: DashMap::new(),
            contracts_registered: DashSet::new(),
            config,
            caller: ActivityResultCaller::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The caller every module's contracts callback receives.
    pub fn caller(&self) -> &ActivityResultCaller {
        &self.caller
    }

    /// Register a finalized definition.
    ///
    /// Returns `Ok(false)` when the module is disabled by configuration.
    pub fn register(&self, definition: ModuleDefinition) -> Result<bool, RegistryError> {
        let name = definition.name().to_string();
        if self.config.is_disabled(&name) {
            tracing::info!(module = %name, "skipping disabled module");
            return Ok(false);
        }

        if self.config.warn_on_duplicate_classes {
            for class in duplicate_class_names(&definition) {
                tracing::warn!(module = %name, class = %class, "module declares class more than once");
            }
        }

        match self.modules.entry(name.clone()) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateModule(name)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(definition));
                tracing::info!(module = %name, "registered module");
                Ok(true)
            }
        }
    }

    /// Build a module's definition and register it.
    pub fn register_module(&self, module: &dyn Module) -> Result<bool, RegistryError> {
        let definition = module.build_definition()?;
        self.register(definition)
    }

    pub fn get(&self, name: &str) -> Option<Arc<ModuleDefinition>> {
        self.modules.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Look up a module, failing with `ModuleNotFound`.
    pub fn require(&self, name: &str) -> Result<Arc<ModuleDefinition>, RegistryError> {
        self.get(name)
            .ok_or_else(|| RegistryError::ModuleNotFound(name.to_string()))
    }

    /// Registered module names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.modules.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Definitions sorted by name. Listeners run against this snapshot so no
    /// map guard is held while user code executes.
    fn snapshot(&self) -> Vec<Arc<ModuleDefinition>> {
        let mut modules: Vec<Arc<ModuleDefinition>> =
            self.modules.iter().map(|e| Arc::clone(e.value())).collect();
        modules.sort_by(|a, b| a.name().cmp(b.name()));
        modules
    }

    fn dispatch<F>(&self, event: EventName, invoke: F) -> usize
    where
        F: Fn(&EventListener) -> bool,
    {
        let mut delivered = 0;
        for module in self.snapshot() {
            let Some(listener) = module.listener(event) else {
                continue;
            };
            if invoke(listener) {
                delivered += 1;
            } else {
                tracing::warn!(
                    module = module.name(),
                    %event,
                    shape = ?listener.shape(),
                    "listener shape does not match event payload, skipped"
                );
            }
        }
        tracing::debug!(%event, delivered, "posted lifecycle event");
        delivered
    }

    /// Post a no-payload event. Returns the number of listeners invoked.
    pub fn post(&self, event: EventName) -> usize {
        if event.payload_shape() != PayloadShape::None {
            tracing::warn!(%event, "event carries a payload and cannot be posted without one");
            return 0;
        }
        self.dispatch(event, |listener| listener.call())
    }

    pub fn post_new_intent(&self, intent: &Intent) -> usize {
        self.dispatch(EventName::OnNewIntent, |listener| {
            listener.call_with_payload(intent)
        })
    }

    pub fn post_activity_result(&self, sender: &Activity, payload: &ActivityResultPayload) -> usize {
        self.dispatch(EventName::OnActivityResult, |listener| {
            listener.call_with_sender_and_payload(sender, payload)
        })
    }

    /// Fire `ModuleCreate`, then run every module's contracts callback.
    pub async fn create_all(&self) -> CreateSummary {
        let listeners = self.post(EventName::ModuleCreate);
        let contracts = self.register_all_contracts().await;
        CreateSummary {
            listeners,
            contracts,
        }
    }

    /// Run the contracts callback of every module that has not run it yet.
    ///
    /// Each callback runs at most once per registry. Returns the number of
    /// callbacks run by this call.
    pub async fn register_all_contracts(&self) -> usize {
        let mut registered = 0;
        for module in self.snapshot() {
            if !module.has_activity_contracts() {
                continue;
            }
            if !self.contracts_registered.insert(module.name().to_string()) {
                tracing::debug!(module = module.name(), "activity contracts already registered");
                continue;
            }
            module
                .register_activity_contracts(self.caller.clone())
                .await;
            tracing::debug!(module = module.name(), "registered activity contracts");
            registered += 1;
        }
        registered
    }

    /// Fire `ModuleDestroy`. Returns the number of listeners invoked.
    pub fn destroy_all(&self) -> usize {
        self.post(EventName::ModuleDestroy)
    }

    /// Manifests of all modules, sorted by name.
    pub fn manifests(&self) -> Vec<ModuleManifest> {
        self.snapshot().iter().map(|m| m.manifest()).collect()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.names())
            .field("config", &self.config)
            .field("caller", &self.caller)
            .finish()
    }
}

fn duplicate_class_names(definition: &ModuleDefinition) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for class in definition.classes() {
        if !seen.insert(class.name()) && !duplicates.contains(&class.name()) {
            duplicates.push(class.name());
        }
    }
    duplicates
}
