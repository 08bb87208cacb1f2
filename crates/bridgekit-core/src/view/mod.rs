//! View definitions.
//!
//! A `ViewDefinitionBuilder<V>` collects the props and events of a native
//! view type `V` and produces a type-erased `ViewManagerDefinition` that the
//! host uses to create views and apply props coming from the calling side.

pub mod builder;
pub mod definition;
pub mod style;

pub use builder::ViewDefinitionBuilder;
pub use definition::{NativeView, PropDefinition, ViewContext, ViewManagerDefinition};
pub use style::{CSS_PROPS, ViewStyle};
