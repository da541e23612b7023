//! Session/dispatch protocol layer for Confab.
//!
//! This crate defines the gateway "ports" (classifier and engager traits)
//! that the infrastructure layer implements, plus everything that does not
//! touch the network: the session store, the frame codec, and the dispatcher.
//! It depends only on `confab-types` -- never on `confab-infra` or axum.

pub mod cache;
pub mod codec;
pub mod dispatch;
pub mod gateway;
pub mod messages;
pub mod session;
