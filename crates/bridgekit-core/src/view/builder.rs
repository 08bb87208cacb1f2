//! Typed view declaration.

use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::CodedError;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::definition::{
    PropDefinition, PropSetter, ViewContext, ViewDestroyer, ViewFactory, ViewManagerDefinition,
};

/// Collects the props and events of the native view type `V`.
pub struct ViewDefinitionBuilder<V> {
    view_type: TypeDescriptor,
    name: Option<String>,
    factory: ViewFactory,
    props: Vec<PropDefinition>,
    events: Vec<String>,
    on_destroy: Option<ViewDestroyer>,
    css_props: bool,
    _view: PhantomData<fn() -> V>,
}

impl<V: Send + 'static> ViewDefinitionBuilder<V> {
    pub fn new<F>(view_type: TypeDescriptor, factory: F) -> Self
    where
        F: Fn(&ViewContext) -> V + Send + Sync + 'static,
    {
        let factory: ViewFactory =
            Arc::new(move |context: &ViewContext| -> Box<dyn Any + Send> { Box::new(factory(context)) });
        Self {
            view_type,
            name: None,
            factory,
            props: Vec::new(),
            events: Vec::new(),
            on_destroy: None,
            css_props: false,
            _view: PhantomData,
        }
    }

    /// Name the view. Unnamed views are reachable through the default slot only.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Declare a prop whose value is deserialized into `T` before `setter` runs.
    ///
    /// Redeclaring a prop replaces the earlier setter.
    pub fn prop<T, F>(&mut self, name: impl Into<String>, setter: F) -> &mut Self
    where
        T: DeserializeOwned + 'static,
        F: Fn(&mut V, T) + Send + Sync + 'static,
    {
        let name = name.into();
        let prop_name = name.clone();
        let setter: PropSetter = Arc::new(
            move |view: &mut (dyn Any + Send), value: Value| -> Result<(), CodedError> {
                let view = view.downcast_mut::<V>().ok_or_else(|| {
                    CodedError::new(
                        CodedError::VIEW_TYPE,
                        format!("prop '{prop_name}' applied to a view of another type"),
                    )
                })?;
                let value: T = serde_json::from_value(value).map_err(|e| {
                    CodedError::new(
                        CodedError::PROP_CONVERSION,
                        format!("cannot convert value of prop '{prop_name}': {e}"),
                    )
                })?;
                setter(view, value);
                Ok(())
            },
        );

        let prop = PropDefinition {
            name,
            value_type: TypeDescriptor::of::<T>(),
            setter,
        };
        match self.props.iter_mut().find(|p| p.name == prop.name) {
            Some(existing) => *existing = prop,
            None => self.props.push(prop),
        }
        self
    }

    pub fn events<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.events.contains(&name) {
                self.events.push(name);
            }
        }
        self
    }

    pub fn on_view_destroys<F>(&mut self, body: F) -> &mut Self
    where
        F: Fn(&mut V) + Send + Sync + 'static,
    {
        let destroyer: ViewDestroyer = Arc::new(move |view: &mut (dyn Any + Send)| {
            if let Some(view) = view.downcast_mut::<V>() {
                body(view);
            }
        });
        self.on_destroy = Some(destroyer);
        self
    }

    /// Accept the standard style props (see [`CSS_PROPS`](super::style::CSS_PROPS)).
    pub fn use_css_props(&mut self) -> &mut Self {
        self.css_props = true;
        self
    }

    pub fn build(&self) -> ViewManagerDefinition {
        ViewManagerDefinition {
            name: self.name.clone(),
            view_type: self.view_type.clone(),
            factory: Arc::clone(&self.factory),
            props: self.props.clone(),
            events: self.events.clone(),
            on_destroy: self.on_destroy.clone(),
            css_props: self.css_props,
        }
    }
}
