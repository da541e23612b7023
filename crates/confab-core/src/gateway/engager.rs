//! Engager trait definition.

use std::future::Future;
use std::sync::Arc;

use confab_types::error::GatewayError;

/// Produces proactive messages for a session when a client says hello.
///
/// The returned order is the order the messages are written to the client.
/// An empty vector is a normal answer.
pub trait Engager: Send + Sync {
    fn engage(&self, token: &str) -> impl Future<Output = Result<Vec<String>, GatewayError>> + Send;
}

impl<T: Engager> Engager for Arc<T> {
    fn engage(&self, token: &str) -> impl Future<Output = Result<Vec<String>, GatewayError>> + Send {
        (**self).engage(token)
    }
}
