//! Type-erased view definitions and the native views they create.

use std::any::Any;
use std::sync::Arc;

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::CodedError;
use bridgekit_types::manifest::ViewManifest;
use serde_json::Value;

use super::style::{CSS_PROPS, ViewStyle};

pub(crate) type ViewFactory = Arc<dyn Fn(&ViewContext) -> Box<dyn Any + Send> + Send + Sync>;
pub(crate) type PropSetter =
    Arc<dyn Fn(&mut (dyn Any + Send), Value) -> Result<(), CodedError> + Send + Sync>;
pub(crate) type ViewDestroyer = Arc<dyn Fn(&mut (dyn Any + Send)) + Send + Sync>;

/// Host-supplied context for creating a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    /// Host-assigned tag identifying the view instance.
    pub tag: u64,
}

impl ViewContext {
    pub fn new(tag: u64) -> Self {
        Self { tag }
    }
}

/// A declared view prop.
#[derive(Clone)]
pub struct PropDefinition {
    pub(crate) name: String,
    pub(crate) value_type: TypeDescriptor,
    pub(crate) setter: PropSetter,
}

impl PropDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> &TypeDescriptor {
        &self.value_type
    }
}

impl std::fmt::Debug for PropDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropDefinition")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// A view instance created by a `ViewManagerDefinition`.
pub struct NativeView {
    tag: u64,
    view_type: TypeDescriptor,
    inner: Box<dyn Any + Send>,
    style: ViewStyle,
}

impl NativeView {
    pub fn tag(&self) -> u64 {
        self.tag
    }

    pub fn view_type(&self) -> &TypeDescriptor {
        &self.view_type
    }

    pub fn style(&self) -> &ViewStyle {
        &self.style
    }

    pub fn downcast_ref<V: 'static>(&self) -> Option<&V> {
        self.inner.downcast_ref::<V>()
    }

    pub fn downcast_mut<V: 'static>(&mut self) -> Option<&mut V> {
        self.inner.downcast_mut::<V>()
    }
}

impl std::fmt::Debug for NativeView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeView")
            .field("tag", &self.tag)
            .field("view_type", &self.view_type)
            .field("style", &self.style)
            .finish()
    }
}

/// Describes a native view type: how to create it and which props and
/// events it exposes.
pub struct ViewManagerDefinition {
    pub(crate) name: Option<String>,
    pub(crate) view_type: TypeDescriptor,
    pub(crate) factory: ViewFactory,
    pub(crate) props: Vec<PropDefinition>,
    pub(crate) events: Vec<String>,
    pub(crate) on_destroy: Option<ViewDestroyer>,
    pub(crate) css_props: bool,
}

impl ViewManagerDefinition {
    /// Explicit name, if one was declared.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn view_type(&self) -> &TypeDescriptor {
        &self.view_type
    }

    pub fn props(&self) -> &[PropDefinition] {
        &self.props
    }

    pub fn prop(&self, name: &str) -> Option<&PropDefinition> {
        self.props.iter().find(|p| p.name == name)
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn uses_css_props(&self) -> bool {
        self.css_props
    }

    /// All prop names a caller may set: explicit props first, then the
    /// style props they don't shadow.
    pub fn prop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.props.iter().map(|p| p.name.clone()).collect();
        if self.css_props {
            for css in CSS_PROPS {
                if self.prop(css).is_none() {
                    names.push(css.to_string());
                }
            }
        }
        names
    }

    pub fn create_view(&self, context: &ViewContext) -> NativeView {
        tracing::debug!(view_type = %self.view_type, tag = context.tag, "creating view");
        NativeView {
            tag: context.tag,
            view_type: self.view_type.clone(),
            inner: (self.factory)(context),
            style: ViewStyle::default(),
        }
    }

    /// Apply a prop value coming from the calling side.
    ///
    /// Explicit props shadow style props of the same name.
    pub fn set_prop(&self, view: &mut NativeView, name: &str, value: Value) -> Result<(), CodedError> {
        if view.view_type != self.view_type {
            return Err(self.view_type_mismatch(view));
        }

        if let Some(prop) = self.prop(name) {
            return (prop.setter)(&mut *view.inner, value);
        }

        if self.css_props && CSS_PROPS.contains(&name) {
            return view.style.apply(name, value);
        }

        Err(CodedError::new(
            CodedError::UNKNOWN_PROP,
            format!("view '{}' has no prop '{name}'", self.view_type.simple_name()),
        ))
    }

    /// Run the destroy callback and drop the view.
    ///
    /// A view created by another definition is handed back untouched with
    /// `ERR_VIEW_TYPE`.
    pub fn destroy_view(&self, mut view: NativeView) -> Result<(), (CodedError, NativeView)> {
        if view.view_type != self.view_type {
            let err = self.view_type_mismatch(&view);
            return Err((err, view));
        }
        tracing::debug!(view_type = %self.view_type, tag = view.tag, "destroying view");
        if let Some(on_destroy) = &self.on_destroy {
            on_destroy(&mut *view.inner);
        }
        Ok(())
    }

    fn view_type_mismatch(&self, view: &NativeView) -> CodedError {
        CodedError::new(
            CodedError::VIEW_TYPE,
            format!(
                "view {} is a '{}', not a '{}'",
                view.tag, view.view_type, self.view_type
            ),
        )
    }

    pub fn manifest(&self) -> ViewManifest {
        ViewManifest {
            name: self.name.clone(),
            view_type: self.view_type.to_string(),
            props: self.prop_names(),
            events: self.events.clone(),
        }
    }
}

impl std::fmt::Debug for ViewManagerDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewManagerDefinition")
            .field("name", &self.name)
            .field("view_type", &self.view_type)
            .field("props", &self.props)
            .field("events", &self.events)
            .field("css_props", &self.css_props)
            .finish()
    }
}
