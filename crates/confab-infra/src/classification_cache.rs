//! Fingerprint-keyed cache in front of a classifier.
//!
//! Identical messages from the same session are answered from memory for
//! the cache TTL instead of hitting the model again. The key is the SHA-256
//! of token and content, so one user's cached reply never reaches another.
//! Failures are not cached.

use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};

use confab_core::cache::TtlCache;
use confab_core::gateway::Classifier;
use confab_types::error::GatewayError;
use confab_types::protocol::Classification;

/// Shared result cache, also registered with the background sweeper.
pub type ClassificationCache = TtlCache<String, Classification>;

/// Hex SHA-256 fingerprint of a `(token, content)` pair.
pub fn fingerprint(token: &str, content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    // Separator keeps ("ab", "c") and ("a", "bc") apart.
    hasher.update([0u8]);
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Wraps `C` with a time-bounded result cache.
pub struct CachedClassifier<C> {
    inner: C,
    cache: Arc<ClassificationCache>,
}

impl<C: Classifier> CachedClassifier<C> {
    pub fn new(inner: C, ttl: Duration) -> Self {
        Self {
            inner,
            cache: Arc::new(TtlCache::new(ttl)),
        }
    }

    pub fn cache(&self) -> &Arc<ClassificationCache> {
        &self.cache
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Classifier> Classifier for CachedClassifier<C> {
    async fn classify(&self, content: &str, token: &str) -> Result<Classification, GatewayError> {
        let key = fingerprint(token, content);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(token, tag = %hit.tag, "Classification cache hit");
            return Ok(hit);
        }

        let classification = self.inner.classify(content, token).await?;
        self.cache.insert(key, classification.clone());
        Ok(classification)
    }
}
