//! Infrastructure layer for Confab.
//!
//! Contains implementations of the gateway traits defined in `confab-core`:
//! HTTP clients for the external classifier and engagement services, the
//! fingerprint-keyed classification cache, and the config and canned
//! message file loaders.

pub mod classification_cache;
pub mod config;
pub mod gateway;
pub mod messages;
pub mod remote;
