//! Object definitions: the constants, properties, functions and events an
//! exported object (a module or a class) exposes to the calling side.
//!
//! - `FunctionDefinition`: sync or async callable with declared argument types
//! - `PropertyDefinition`: getter with optional setter
//! - `ObjectDefinitionBuilder`: accumulates the above into `ObjectDefinitionData`
//! - `ObjectDefinitionScope`: declaration surface shared by module and class builders

pub mod builder;
pub mod function;
pub mod property;

pub use builder::{ObjectDefinitionBuilder, ObjectDefinitionData, ObjectDefinitionScope};
pub use function::{FunctionBody, FunctionDefinition};
pub use property::PropertyDefinition;
