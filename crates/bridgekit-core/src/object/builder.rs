//! Accumulation of object members into an immutable `ObjectDefinitionData`.

use std::collections::BTreeMap;
use std::future::Future;

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::CodedError;
use bridgekit_types::manifest::{FunctionManifest, ObjectManifest, PropertyManifest};
use serde_json::Value;

use super::function::FunctionDefinition;
use super::property::PropertyDefinition;

/// The finalized members of an exported object.
#[derive(Debug, Clone, Default)]
pub struct ObjectDefinitionData {
    constants: BTreeMap<String, Value>,
    functions: Vec<FunctionDefinition>,
    properties: Vec<PropertyDefinition>,
    events: Vec<String>,
}

impl ObjectDefinitionData {
    pub fn constants(&self) -> &BTreeMap<String, Value> {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    pub fn functions(&self) -> &[FunctionDefinition] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.iter().find(|f| f.name() == name)
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
            && self.functions.is_empty()
            && self.properties.is_empty()
            && self.events.is_empty()
    }

    pub fn manifest(&self) -> ObjectManifest {
        ObjectManifest {
            constants: self.constants.clone(),
            functions: self
                .functions
                .iter()
                .map(|f| FunctionManifest {
                    name: f.name().to_string(),
                    args: f.args().iter().map(|a| a.to_string()).collect(),
                    is_async: f.is_async(),
                })
                .collect(),
            properties: self
                .properties
                .iter()
                .map(|p| PropertyManifest {
                    name: p.name().to_string(),
                    writable: p.is_writable(),
                })
                .collect(),
            events: self.events.clone(),
        }
    }
}

/// Mutable accumulator for object members.
///
/// Functions and properties are keyed by name: redeclaring one replaces the
/// earlier declaration in place, keeping its original position.
#[derive(Debug, Clone, Default)]
pub struct ObjectDefinitionBuilder {
    data: ObjectDefinitionData,
}

impl ObjectDefinitionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_constant(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.data.constants.insert(name.into(), value.into());
    }

    pub fn add_function(&mut self, function: FunctionDefinition) {
        let functions = &mut self.data.functions;
        match functions.iter_mut().find(|f| f.name() == function.name()) {
            Some(existing) => *existing = function,
            None => functions.push(function),
        }
    }

    pub fn add_property(&mut self, property: PropertyDefinition) {
        let properties = &mut self.data.properties;
        match properties.iter_mut().find(|p| p.name() == property.name()) {
            Some(existing) => *existing = property,
            None => properties.push(property),
        }
    }

    pub fn add_events<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.data.events.contains(&name) {
                self.data.events.push(name);
            }
        }
    }

    /// Snapshot the accumulated members.
    pub fn build(&self) -> ObjectDefinitionData {
        self.data.clone()
    }
}

/// Declaration surface shared by every builder that exports an object.
///
/// Implementors only expose their inner [`ObjectDefinitionBuilder`]; the
/// fluent declaration methods are provided.
pub trait ObjectDefinitionScope {
    fn object_builder(&mut self) -> &mut ObjectDefinitionBuilder;

    fn constant(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self
    where
        Self: Sized,
    {
        self.object_builder().add_constant(name, value);
        self
    }

    fn function<F>(
        &mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = TypeDescriptor>,
        body: F,
    ) -> &mut Self
    where
        Self: Sized,
        F: Fn(&[Value]) -> Result<Value, CodedError> + Send + Sync + 'static,
    {
        let function = FunctionDefinition::new_sync(name, args.into_iter().collect(), body);
        self.object_builder().add_function(function);
        self
    }

    fn async_function<F, Fut>(
        &mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = TypeDescriptor>,
        body: F,
    ) -> &mut Self
    where
        Self: Sized,
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, CodedError>> + Send + 'static,
    {
        let function = FunctionDefinition::new_async(name, args.into_iter().collect(), body);
        self.object_builder().add_function(function);
        self
    }

    fn property<G>(&mut self, name: impl Into<String>, getter: G) -> &mut Self
    where
        Self: Sized,
        G: Fn() -> Value + Send + Sync + 'static,
    {
        self.object_builder()
            .add_property(PropertyDefinition::read_only(name, getter));
        self
    }

    fn property_with_setter<G, S>(&mut self, name: impl Into<String>, getter: G, setter: S) -> &mut Self
    where
        Self: Sized,
        G: Fn() -> Value + Send + Sync + 'static,
        S: Fn(Value) -> Result<(), CodedError> + Send + Sync + 'static,
    {
        self.object_builder()
            .add_property(PropertyDefinition::read_write(name, getter, setter));
        self
    }

    fn events<I, S>(&mut self, names: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.object_builder().add_events(names);
        self
    }
}

impl ObjectDefinitionScope for ObjectDefinitionBuilder {
    fn object_builder(&mut self) -> &mut ObjectDefinitionBuilder {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn constants_last_declaration_wins() {
        let mut builder = ObjectDefinitionBuilder::new();
        builder.constant("ratio", 3).constant("ratio", 2.5);
        let data = builder.build();
        assert_eq!(data.constant("ratio"), Some(&json!(2.5)));
    }

    #[test]
    fn redeclared_function_replaces_in_place() {
        let mut builder = ObjectDefinitionBuilder::new();
        builder
            .function("a", [], |_| Ok(json!(1)))
            .function("b", [], |_| Ok(json!(2)))
            .function("a", [], |_| Ok(json!(3)));

        let data = builder.build();
        let names: Vec<&str> = data.functions().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(
            data.function("a").unwrap().call_sync(Vec::new()).unwrap(),
            json!(3)
        );
    }

    #[test]
    fn events_are_deduplicated_in_order() {
        let mut builder = ObjectDefinitionBuilder::new();
        builder
            .events(["onChange", "onFocus"])
            .events(["onChange", "onBlur"]);
        assert_eq!(builder.build().events(), ["onChange", "onFocus", "onBlur"]);
    }

    #[test]
    fn build_snapshots_current_state() {
        let mut builder = ObjectDefinitionBuilder::new();
        builder.constant("a", 1);
        let first = builder.build();
        builder.constant("b", 2);
        let second = builder.build();

        assert_eq!(first.constants().len(), 1);
        assert_eq!(second.constants().len(), 2);
    }

    #[test]
    fn manifest_lists_members() {
        let mut builder = ObjectDefinitionBuilder::new();
        builder
            .constant("version", "1.0")
            .function(
                "format",
                [
                    TypeDescriptor::new("String"),
                    TypeDescriptor::new("String").optional(),
                ],
                |_| Ok(Value::Null),
            )
            .async_function("load", [], |_| async { Ok(Value::Null) })
            .property("ready", || json!(true));

        let manifest = builder.build().manifest();
        assert_eq!(manifest.constants["version"], json!("1.0"));
        assert_eq!(manifest.functions.len(), 2);
        assert_eq!(manifest.functions[0].args, vec!["String", "String?"]);
        assert!(manifest.functions[1].is_async);
        assert_eq!(manifest.properties[0].name, "ready");
        assert!(!manifest.properties[0].writable);
    }

    #[test]
    fn empty_builder_builds_empty_data() {
        assert!(ObjectDefinitionBuilder::new().build().is_empty());
    }
}
