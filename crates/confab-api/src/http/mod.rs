//! HTTP layer: the WebSocket endpoint plus a health probe.

pub mod handlers;
pub mod router;
