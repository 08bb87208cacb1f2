//! The immutable module definition produced by `ModuleDefinitionBuilder::build`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use bridgekit_types::event::EventName;
use bridgekit_types::manifest::ModuleManifest;

use crate::activity_result::{ActivityResultCaller, RegisterContractsFn};
use crate::class::ClassDefinitionData;
use crate::listener::EventListener;
use crate::object::ObjectDefinitionData;
use crate::view::ViewManagerDefinition;

/// Key under which the first registered view is also stored.
pub const DEFAULT_MODULE_VIEW: &str = "DEFAULT_MODULE_VIEW";

/// Everything a module exports, as declared by its builder.
///
/// Never mutated after construction; share it as `Arc<ModuleDefinition>`.
#[derive(Clone)]
pub struct ModuleDefinition {
    pub(crate) name: String,
    pub(crate) object: ObjectDefinitionData,
    pub(crate) views: HashMap<String, Arc<ViewManagerDefinition>>,
    pub(crate) listeners: HashMap<EventName, EventListener>,
    pub(crate) register_contracts: Option<Arc<RegisterContractsFn>>,
    pub(crate) classes: Vec<ClassDefinitionData>,
}

impl ModuleDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object(&self) -> &ObjectDefinitionData {
        &self.object
    }

    /// Look up a view by name; `None` resolves the default view.
    pub fn view(&self, name: Option<&str>) -> Option<&Arc<ViewManagerDefinition>> {
        self.views.get(name.unwrap_or(DEFAULT_MODULE_VIEW))
    }

    /// All view registrations, the default slot included.
    pub fn views(&self) -> &HashMap<String, Arc<ViewManagerDefinition>> {
        &self.views
    }

    pub fn listener(&self, event: EventName) -> Option<&EventListener> {
        self.listeners.get(&event)
    }

    /// Events this module listens to, in enum order.
    pub fn listened_events(&self) -> Vec<EventName> {
        let mut events: Vec<EventName> = self.listeners.keys().copied().collect();
        events.sort();
        events
    }

    pub fn classes(&self) -> &[ClassDefinitionData] {
        &self.classes
    }

    pub fn has_activity_contracts(&self) -> bool {
        self.register_contracts.is_some()
    }

    /// Run the contracts callback against `caller`.
    ///
    /// Returns `false` when the module declared no contracts.
    pub async fn register_activity_contracts(&self, caller: ActivityResultCaller) -> bool {
        match &self.register_contracts {
            Some(register) => {
                register(caller).await;
                true
            }
            None => false,
        }
    }

    pub fn manifest(&self) -> ModuleManifest {
        ModuleManifest {
            name: self.name.clone(),
            object: self.object.manifest(),
            views: self
                .views
                .iter()
                .map(|(key, view)| (key.clone(), view.manifest()))
                .collect::<BTreeMap<_, _>>(),
            listeners: self.listened_events(),
            registers_activity_contracts: self.has_activity_contracts(),
            classes: self.classes.iter().map(|c| c.manifest()).collect(),
        }
    }
}

impl std::fmt::Debug for ModuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleDefinition")
            .field("name", &self.name)
            .field("object", &self.object)
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("listeners", &self.listened_events())
            .field("has_activity_contracts", &self.has_activity_contracts())
            .field("classes", &self.classes.len())
            .finish()
    }
}
