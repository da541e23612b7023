//! Request handlers for the gateway router.

pub mod health;
pub mod ws;
