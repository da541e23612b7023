//! Application state wiring all services together.
//!
//! The dispatcher is generic over its gateways; AppState pins it to the
//! implementations chosen from configuration at startup.

use std::path::Path;
use std::sync::Arc;

use confab_core::dispatch::Dispatcher;
use confab_core::messages::MessageTable;
use confab_core::session::store::SessionStore;
use confab_core::session::sweeper::SweepTarget;
use confab_infra::classification_cache::ClassificationCache;
use confab_infra::gateway::{ConfiguredClassifier, ConfiguredEngager};
use confab_infra::messages::load_message_table;
use confab_types::config::GatewayConfig;

/// Dispatcher pinned to the configured gateway implementations.
pub type ConcreteDispatcher = Dispatcher<ConfiguredClassifier, ConfiguredEngager>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub dispatcher: Arc<ConcreteDispatcher>,
    pub sessions: Arc<SessionStore>,
    pub classification_cache: Option<Arc<ClassificationCache>>,
}

impl AppState {
    /// Load the message table and build the gateways for `config`.
    pub async fn init(config: GatewayConfig) -> anyhow::Result<Self> {
        let messages = load_message_table(config.messages_path.as_deref().map(Path::new)).await;
        Self::from_parts(config, Arc::new(messages))
    }

    /// Build state from an already loaded message table.
    pub fn from_parts(config: GatewayConfig, messages: Arc<MessageTable>) -> anyhow::Result<Self> {
        let sessions = Arc::new(SessionStore::new(config.session_ttl()));

        let classifier = ConfiguredClassifier::from_config(&config, Arc::clone(&messages))?;
        let engager = ConfiguredEngager::from_config(&config)?;
        let classification_cache = classifier.result_cache();

        tracing::info!(
            classifier = %classifier.describe(),
            engager = %engager.describe(),
            session_ttl_secs = config.session_ttl_secs,
            max_content_chars = config.max_content_chars,
            "Gateway services ready"
        );

        let dispatcher = Dispatcher::new(Arc::clone(&sessions), classifier, engager, messages)
            .with_max_content_chars(config.max_content_chars);

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
            sessions,
            classification_cache,
        })
    }

    /// Caches the background sweeper should purge.
    pub fn sweep_targets(&self) -> Vec<SweepTarget> {
        let mut targets = vec![SweepTarget::new("sessions", self.sessions.clone())];
        if let Some(cache) = &self.classification_cache {
            targets.push(SweepTarget::new("classifications", cache.clone()));
        }
        targets
    }
}
