//! Serializable summaries of a module's exported surface.
//!
//! A `ModuleManifest` lists everything a module exports to the calling side
//! of the bridge without any of the callable parts, so it can be printed,
//! diffed, or sent across a process boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::EventName;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub name: String,
    pub object: ObjectManifest,
    /// View definitions by registration key (the default slot included).
    pub views: BTreeMap<String, ViewManifest>,
    /// Lifecycle events the module listens to, in enum order.
    pub listeners: Vec<EventName>,
    pub registers_activity_contracts: bool,
    pub classes: Vec<ClassManifest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectManifest {
    pub constants: BTreeMap<String, Value>,
    pub functions: Vec<FunctionManifest>,
    pub properties: Vec<PropertyManifest>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionManifest {
    pub name: String,
    /// Argument types rendered with a trailing `?` when optional.
    pub args: Vec<String>,
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyManifest {
    pub name: String,
    pub writable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewManifest {
    pub name: Option<String>,
    pub view_type: String,
    pub props: Vec<String>,
    pub events: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassManifest {
    pub name: String,
    /// `None` for stateless classes.
    pub owner_type: Option<String>,
    pub has_constructor: bool,
    pub object: ObjectManifest,
}
