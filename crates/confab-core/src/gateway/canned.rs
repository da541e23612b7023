//! Local stand-ins used when no external gateway is configured.

use std::sync::Arc;

use confab_types::error::GatewayError;
use confab_types::protocol::{Classification, DONT_UNDERSTAND_TAG};

use super::{Classifier, Engager};
use crate::messages::MessageTable;

/// Answers every chat message with the "don't understand" canned reply.
pub struct CannedClassifier {
    messages: Arc<MessageTable>,
}

impl CannedClassifier {
    pub fn new(messages: Arc<MessageTable>) -> Self {
        Self { messages }
    }
}

impl Classifier for CannedClassifier {
    async fn classify(&self, _content: &str, _token: &str) -> Result<Classification, GatewayError> {
        Ok(Classification::new(
            DONT_UNDERSTAND_TAG,
            self.messages.pick(DONT_UNDERSTAND_TAG),
        ))
    }
}

/// Never has anything to say on handshake.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentEngager;

impl Engager for SilentEngager {
    async fn engage(&self, _token: &str) -> Result<Vec<String>, GatewayError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_classifier_uses_table() {
        let table = Arc::new(MessageTable::builtin());
        let classifier = CannedClassifier::new(table.clone());

        let result = classifier.classify("what's the weather?", "abc").await.unwrap();
        assert_eq!(result.tag, DONT_UNDERSTAND_TAG);
        assert!(table.messages(DONT_UNDERSTAND_TAG).contains(&result.content));
    }

    #[tokio::test]
    async fn silent_engager_is_empty() {
        assert!(SilentEngager.engage("abc").await.unwrap().is_empty());
    }
}
