//! Contracts for the external collaborators of the dispatcher.
//!
//! The intent classifier and the engagement module host live outside this
//! crate. The dispatcher only sees these two narrow traits, so it can be
//! driven by stub implementations in tests and by HTTP-backed ones
//! (`confab-infra`) in production.

pub mod canned;
pub mod classifier;
pub mod engager;

pub use classifier::Classifier;
pub use engager::Engager;
