//! Module definition builders and host registry for Bridgekit.
//!
//! Native modules declare their exported surface (constants, functions,
//! views, classes, lifecycle listeners, activity-result contracts) against a
//! `ModuleDefinitionBuilder`. The resulting immutable `ModuleDefinition` is
//! handed to a `ModuleRegistry`, which drives the module lifecycle.

pub mod activity_result;
pub mod class;
pub mod config;
pub mod listener;
pub mod module;
pub mod object;
pub mod registry;
pub mod view;

pub use module::{DEFAULT_MODULE_VIEW, Module, ModuleDefinition, ModuleDefinitionBuilder};
pub use object::ObjectDefinitionScope;
pub use registry::{CreateSummary, ModuleRegistry};
