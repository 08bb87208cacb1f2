//! Observability setup for Bridgekit binaries.

pub mod tracing_setup;
