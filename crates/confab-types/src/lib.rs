//! Shared domain types for Confab.
//!
//! This crate contains the types exchanged between the gateway layers:
//! protocol requests and responses, user information, configuration, and
//! their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod information;
pub mod protocol;
