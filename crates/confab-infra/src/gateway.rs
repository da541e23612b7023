//! Runtime selection of gateway implementations from configuration.
//!
//! A configured URL selects the remote client; otherwise the local
//! stand-ins from `confab-core` answer. The enums let the dispatcher stay
//! statically typed while the choice is made at startup.

use std::sync::Arc;

use confab_core::gateway::canned::{CannedClassifier, SilentEngager};
use confab_core::gateway::{Classifier, Engager};
use confab_core::messages::MessageTable;
use confab_types::config::GatewayConfig;
use confab_types::error::GatewayError;
use confab_types::protocol::Classification;

use crate::classification_cache::{CachedClassifier, ClassificationCache};
use crate::remote::{RemoteClassifier, RemoteEngager};

/// The classifier the gateway was started with.
pub enum ConfiguredClassifier {
    Remote(CachedClassifier<RemoteClassifier>),
    Canned(CannedClassifier),
}

impl ConfiguredClassifier {
    /// Choose the classifier for `config`.
    pub fn from_config(
        config: &GatewayConfig,
        messages: Arc<MessageTable>,
    ) -> Result<Self, GatewayError> {
        match config.classifier_url.as_deref() {
            Some(url) => {
                let remote = RemoteClassifier::new(url, config.gateway_timeout())?;
                tracing::info!(endpoint = url, "Using remote classifier");
                Ok(Self::Remote(CachedClassifier::new(
                    remote,
                    config.classification_cache_ttl(),
                )))
            }
            None => {
                tracing::info!("No classifier_url configured, answering with canned replies");
                Ok(Self::Canned(CannedClassifier::new(messages)))
            }
        }
    }

    /// The result cache to sweep, when there is one.
    pub fn result_cache(&self) -> Option<Arc<ClassificationCache>> {
        match self {
            Self::Remote(cached) => Some(Arc::clone(cached.cache())),
            Self::Canned(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote(cached) => format!("remote ({})", cached.inner().endpoint()),
            Self::Canned(_) => "canned".to_string(),
        }
    }
}

impl Classifier for ConfiguredClassifier {
    async fn classify(&self, content: &str, token: &str) -> Result<Classification, GatewayError> {
        match self {
            Self::Remote(classifier) => classifier.classify(content, token).await,
            Self::Canned(classifier) => classifier.classify(content, token).await,
        }
    }
}

/// The engager the gateway was started with.
pub enum ConfiguredEngager {
    Remote(RemoteEngager),
    Silent(SilentEngager),
}

impl ConfiguredEngager {
    /// Choose the engager for `config`.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        match config.engager_url.as_deref() {
            Some(url) => {
                tracing::info!(endpoint = url, "Using remote engager");
                Ok(Self::Remote(RemoteEngager::new(url, config.gateway_timeout())?))
            }
            None => {
                tracing::info!("No engager_url configured, handshakes get no engagement");
                Ok(Self::Silent(SilentEngager))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Remote(engager) => format!("remote ({})", engager.endpoint()),
            Self::Silent(_) => "silent".to_string(),
        }
    }
}

impl Engager for ConfiguredEngager {
    async fn engage(&self, token: &str) -> Result<Vec<String>, GatewayError> {
        match self {
            Self::Remote(engager) => engager.engage(token).await,
            Self::Silent(engager) => engager.engage(token).await,
        }
    }
}
