//! Per-token session state shared across connections.

pub mod store;
pub mod sweeper;
