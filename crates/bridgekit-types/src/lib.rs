//! Shared definition types for Bridgekit.
//!
//! This crate contains the plain data types used across the Bridgekit
//! workspace: lifecycle event names, listener payloads, type descriptors,
//! registry configuration, serializable manifests, and the error types.
//!
//! No closures live here -- the callable parts of a module definition are
//! owned by `bridgekit-core`.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod event;
pub mod manifest;
pub mod payload;
