//! Confab gateway server: shared state, router and WebSocket handler.
//!
//! The `confab` binary and the integration tests build the same app from
//! these pieces.

pub mod http;
pub mod state;
