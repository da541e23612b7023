//! Request dispatch: reply policy and the per-connection frame loop.

pub mod connection;
pub mod reply;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::{CloseReason, ConnectionStats};
pub use reply::Dispatcher;
