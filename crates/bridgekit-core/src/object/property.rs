//! Exported properties.

use std::sync::Arc;

use bridgekit_types::error::CodedError;
use serde_json::Value;

type Getter = dyn Fn() -> Value + Send + Sync;
type Setter = dyn Fn(Value) -> Result<(), CodedError> + Send + Sync;

/// A named property with a getter and an optional setter.
#[derive(Clone)]
pub struct PropertyDefinition {
    name: String,
    getter: Arc<Getter>,
    setter: Option<Arc<Setter>>,
}

impl PropertyDefinition {
    pub fn read_only<G>(name: impl Into<String>, getter: G) -> Self
    where
        G: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            getter: Arc::new(getter),
            setter: None,
        }
    }

    pub fn read_write<G, S>(name: impl Into<String>, getter: G, setter: S) -> Self
    where
        G: Fn() -> Value + Send + Sync + 'static,
        S: Fn(Value) -> Result<(), CodedError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            getter: Arc::new(getter),
            setter: Some(Arc::new(setter)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_writable(&self) -> bool {
        self.setter.is_some()
    }

    pub fn get(&self) -> Value {
        (self.getter)()
    }

    pub fn set(&self, value: Value) -> Result<(), CodedError> {
        match &self.setter {
            Some(setter) => setter(value),
            None => Err(CodedError::new(
                CodedError::PROPERTY_READ_ONLY,
                format!("property '{}' is read-only", self.name),
            )),
        }
    }
}

impl std::fmt::Debug for PropertyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDefinition")
            .field("name", &self.name)
            .field("writable", &self.is_writable())
            .finish()
    }
}
