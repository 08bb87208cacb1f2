//! Module definitions.
//!
//! A native module describes its exported surface by implementing [`Module`]
//! and declaring everything against a [`ModuleDefinitionBuilder`].

pub mod builder;
pub mod definition;

pub use builder::ModuleDefinitionBuilder;
pub use definition::{DEFAULT_MODULE_VIEW, ModuleDefinition};

use bridgekit_types::descriptor::TypeDescriptor;
use bridgekit_types::error::DefinitionError;

/// A native module that can describe itself to the host.
pub trait Module: Send + Sync {
    /// Descriptor of the module's own type; its simple name is the default
    /// module name.
    fn type_descriptor(&self) -> TypeDescriptor;

    /// Declare the module's exported surface.
    fn definition(&self, builder: &mut ModuleDefinitionBuilder) -> Result<(), DefinitionError>;

    /// Run one declaration pass and finalize it.
    fn build_definition(&self) -> Result<ModuleDefinition, DefinitionError> {
        let mut builder = ModuleDefinitionBuilder::for_type(self.type_descriptor());
        self.definition(&mut builder)?;
        builder.build()
    }
}
