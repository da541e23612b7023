//! Classifier trait definition.

use std::future::Future;
use std::sync::Arc;

use confab_types::error::GatewayError;
use confab_types::protocol::Classification;

/// Maps raw chat text to an intent tag and the reply to send.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations must not mutate dispatcher state; they may keep their
/// own caches. A slow call stalls only the connection awaiting it.
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        content: &str,
        token: &str,
    ) -> impl Future<Output = Result<Classification, GatewayError>> + Send;
}

impl<T: Classifier> Classifier for Arc<T> {
    fn classify(
        &self,
        content: &str,
        token: &str,
    ) -> impl Future<Output = Result<Classification, GatewayError>> + Send {
        (**self).classify(content, token)
    }
}
