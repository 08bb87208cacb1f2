//! Class definitions: named, optionally type-backed objects a module exports.

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::CodedError;
use bridgekit_types::manifest::ClassManifest;
use serde_json::Value;

use crate::object::{
    FunctionDefinition, ObjectDefinitionBuilder, ObjectDefinitionData, ObjectDefinitionScope,
};

/// The finalized definition of an exported class.
#[derive(Debug, Clone)]
pub struct ClassDefinitionData {
    name: String,
    owner_type: TypeDescriptor,
    object: ObjectDefinitionData,
    constructor: Option<FunctionDefinition>,
}

impl ClassDefinitionData {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The native type instances are backed by; the unit sentinel for
    /// stateless classes.
    pub fn owner_type(&self) -> &TypeDescriptor {
        &self.owner_type
    }

    pub fn object(&self) -> &ObjectDefinitionData {
        &self.object
    }

    pub fn constructor(&self) -> Option<&FunctionDefinition> {
        self.constructor.as_ref()
    }

    /// Whether instances wrap a native object rather than being stateless.
    pub fn is_shared_object(&self) -> bool {
        !self.owner_type.is_unit()
    }

    pub fn manifest(&self) -> ClassManifest {
        ClassManifest {
            name: self.name.clone(),
            owner_type: self
                .is_shared_object()
                .then(|| self.owner_type.to_string()),
            has_constructor: self.constructor.is_some(),
            object: self.object.manifest(),
        }
    }
}

/// Collects the members of one class declaration.
#[derive(Debug, Clone)]
pub struct ClassComponentBuilder {
    name: String,
    owner_type: TypeDescriptor,
    object: ObjectDefinitionBuilder,
    constructor: Option<FunctionDefinition>,
}

impl ClassComponentBuilder {
    pub fn new(name: impl Into<String>, owner_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            owner_type,
            object: ObjectDefinitionBuilder::new(),
            constructor: None,
        }
    }

    /// Declare the constructor invoked when the calling side creates an instance.
    pub fn constructor<F>(&mut self, args: impl IntoIterator<Item = TypeDescriptor>, body: F) -> &mut Self
    where
        F: Fn(&[Value]) -> Result<Value, CodedError> + Send + Sync + 'static,
    {
        self.constructor = Some(FunctionDefinition::new_sync(
            "constructor",
            args.into_iter().collect(),
            body,
        ));
        self
    }

    pub fn build(&self) -> ClassDefinitionData {
        ClassDefinitionData {
            name: self.name.clone(),
            owner_type: self.owner_type.clone(),
            object: self.object.build(),
            constructor: self.constructor.clone(),
        }
    }
}

impl ObjectDefinitionScope for ClassComponentBuilder {
    fn object_builder(&mut self) -> &mut ObjectDefinitionBuilder {
        &mut self.object
    }
}
