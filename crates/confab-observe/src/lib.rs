//! Observability setup for Confab: log formatting and span export.

pub mod tracing_setup;
