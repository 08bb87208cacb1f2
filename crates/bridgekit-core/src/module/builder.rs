//! Fluent declaration surface for a module.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::DefinitionError;
use bridgekit_types::event::EventName;
use bridgekit_types::payload::{Activity, ActivityResultPayload, Intent};
use futures_util::future::BoxFuture;

use crate::activity_result::{ActivityResultCaller, RegisterContractsFn};
use crate::class::{ClassComponentBuilder, ClassDefinitionData};
use crate::listener::EventListener;
use crate::object::{ObjectDefinitionBuilder, ObjectDefinitionScope};
use crate::view::{ViewContext, ViewDefinitionBuilder, ViewManagerDefinition};

use super::definition::{DEFAULT_MODULE_VIEW, ModuleDefinition};

/// Accumulates a module's declarations during one declaration pass.
///
/// Constants, properties, functions and events come from
/// [`ObjectDefinitionScope`]; everything module-specific (views, lifecycle
/// listeners, activity contracts, classes) is declared here. [`build`](Self::build)
/// snapshots the current state into an immutable [`ModuleDefinition`].
pub struct ModuleDefinitionBuilder {
    owner_type: Option<TypeDescriptor>,
    name: Option<String>,
    object: ObjectDefinitionBuilder,
    views: HashMap<String, Arc<ViewManagerDefinition>>,
    listeners: HashMap<EventName, EventListener>,
    register_contracts: Option<Arc<RegisterContractsFn>>,
    classes: Vec<ClassDefinitionData>,
}

impl ModuleDefinitionBuilder {
    /// A builder with no owning type: a name must be set explicitly.
    pub fn new() -> Self {
        Self {
            owner_type: None,
            name: None,
            object: ObjectDefinitionBuilder::new(),
            views: HashMap::new(),
            listeners: HashMap::new(),
            register_contracts: None,
            classes: Vec::new(),
        }
    }

    /// A builder whose name defaults to the simple name of `owner_type`.
    pub fn for_type(owner_type: TypeDescriptor) -> Self {
        Self {
            owner_type: Some(owner_type),
            ..Self::new()
        }
    }

    /// Set the name the module is exported under. Last call wins.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a view of native type `V`.
    ///
    /// Style props are enabled before `configure` runs.
    pub fn view<V, F, C>(
        &mut self,
        view_type: TypeDescriptor,
        factory: F,
        configure: C,
    ) -> Result<&mut Self, DefinitionError>
    where
        V: Send + 'static,
        F: Fn(&ViewContext) -> V + Send + Sync + 'static,
        C: FnOnce(&mut ViewDefinitionBuilder<V>),
    {
        let mut builder = ViewDefinitionBuilder::new(view_type, factory);
        builder.use_css_props();
        configure(&mut builder);
        self.register_view(builder.build())
    }

    /// Register a finished view definition.
    ///
    /// The first registered view also fills the `DEFAULT_MODULE_VIEW` slot.
    pub fn register_view(&mut self, definition: ViewManagerDefinition) -> Result<&mut Self, DefinitionError> {
        let definition = Arc::new(definition);

        if let Some(name) = definition.name() {
            if self.views.contains_key(name) {
                return Err(DefinitionError::DuplicateView(name.to_string()));
            }
            self.views.insert(name.to_string(), Arc::clone(&definition));
        }

        if !self.views.contains_key(DEFAULT_MODULE_VIEW) {
            self.views
                .insert(DEFAULT_MODULE_VIEW.to_string(), Arc::clone(&definition));
        } else if definition.name().is_none() {
            tracing::warn!(
                view_type = %definition.view_type(),
                "unnamed view is unreachable: the default view slot is already taken"
            );
        }

        tracing::debug!(
            name = definition.name().unwrap_or(DEFAULT_MODULE_VIEW),
            view_type = %definition.view_type(),
            "registered view"
        );
        Ok(self)
    }

    fn listen(&mut self, event: EventName, listener: EventListener) -> &mut Self {
        if self.listeners.insert(event, listener).is_some() {
            tracing::debug!(%event, "replaced lifecycle listener");
        }
        self
    }

    /// Runs right after the module is created.
    pub fn on_create<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::ModuleCreate, EventListener::basic(body))
    }

    /// Runs when the module is about to be deallocated.
    pub fn on_destroy<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::ModuleDestroy, EventListener::basic(body))
    }

    /// Runs right after the activity is resumed.
    pub fn on_activity_enters_foreground<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::ActivityEntersForeground, EventListener::basic(body))
    }

    /// Runs right after the activity is paused.
    pub fn on_activity_enters_background<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::ActivityEntersBackground, EventListener::basic(body))
    }

    /// Runs right before the user leaves the activity.
    pub fn on_user_leaves_activity<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::OnUserLeavesActivity, EventListener::basic(body))
    }

    /// Runs right after the activity is destroyed.
    pub fn on_activity_destroys<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.listen(EventName::ActivityDestroys, EventListener::basic(body))
    }

    /// Runs right after the new intent was received.
    pub fn on_new_intent<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&Intent) + Send + Sync + 'static,
    {
        self.listen(EventName::OnNewIntent, EventListener::with_payload(body))
    }

    /// Runs right after the activity has received a result.
    pub fn on_activity_result<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&Activity, &ActivityResultPayload) + Send + Sync + 'static,
    {
        self.listen(
            EventName::OnActivityResult,
            EventListener::with_sender_and_payload(body),
        )
    }

    /// Store the callback that registers activity-result contracts. The host
    /// runs it after the create listener. Last call wins.
    pub fn register_activity_contracts<F, Fut>(&mut self, body: F) -> &mut Self
    where
        F: Fn(ActivityResultCaller) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let register: Arc<RegisterContractsFn> =
            Arc::new(move |caller: ActivityResultCaller| -> BoxFuture<'static, ()> {
                Box::pin(body(caller))
            });
        self.register_contracts = Some(register);
        self
    }

    fn push_class<C>(&mut self, name: String, owner_type: TypeDescriptor, configure: C) -> &mut Self
    where
        C: FnOnce(&mut ClassComponentBuilder),
    {
        let mut builder = ClassComponentBuilder::new(name, owner_type);
        configure(&mut builder);
        let class = builder.build();
        tracing::debug!(class = class.name(), owner_type = %class.owner_type(), "declared class");
        self.classes.push(class);
        self
    }

    /// Declare a stateless class.
    pub fn class<C>(&mut self, name: impl Into<String>, configure: C) -> &mut Self
    where
        C: FnOnce(&mut ClassComponentBuilder),
    {
        self.push_class(name.into(), TypeDescriptor::unit(), configure)
    }

    /// Declare a class backed by the native type `owner_type`.
    pub fn class_with_type<C>(
        &mut self,
        name: impl Into<String>,
        owner_type: TypeDescriptor,
        configure: C,
    ) -> &mut Self
    where
        C: FnOnce(&mut ClassComponentBuilder),
    {
        self.push_class(name.into(), owner_type, configure)
    }

    /// Declare a class named after its native type's simple name.
    pub fn class_for_type<C>(&mut self, owner_type: TypeDescriptor, configure: C) -> &mut Self
    where
        C: FnOnce(&mut ClassComponentBuilder),
    {
        let name = owner_type.simple_name().to_string();
        self.push_class(name, owner_type, configure)
    }

    /// Snapshot the declarations into a [`ModuleDefinition`].
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::MissingName`] when no name was set and none
    /// can be derived from the owning type.
    pub fn build(&self) -> Result<ModuleDefinition, DefinitionError> {
        let name = self
            .name
            .clone()
            .or_else(|| {
                self.owner_type
                    .as_ref()
                    .map(|t| t.simple_name().to_string())
                    .filter(|n| !n.is_empty())
            })
            .ok_or(DefinitionError::MissingName)?;

        Ok(ModuleDefinition {
            name,
            object: self.object.build(),
            views: self.views.clone(),
            listeners: self.listeners.clone(),
            register_contracts: self.register_contracts.clone(),
            classes: self.classes.clone(),
        })
    }
}

impl std::fmt::Debug for ModuleDefinitionBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut listeners: Vec<EventName> = self.listeners.keys().copied().collect();
        listeners.sort();
        f.debug_struct("ModuleDefinitionBuilder")
            .field("owner_type", &self.owner_type)
            .field("name", &self.name)
            .field("views", &self.views.keys().collect::<Vec<_>>())
            .field("listeners", &listeners)
            .field("has_activity_contracts", &self.register_contracts.is_some())
            .field("classes", &self.classes.len())
            .finish()
    }
}

impl Default for ModuleDefinitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectDefinitionScope for ModuleDefinitionBuilder {
    fn object_builder(&mut self) -> &mut ObjectDefinitionBuilder {
        &mut self.object
    }
}
