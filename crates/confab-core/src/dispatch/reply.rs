//! Reply construction policy.
//!
//! Turns one decoded request into the responses it deserves:
//!
//! - handshake: one `"engage conversation"` response per engagement message
//! - chat: exactly one response, either the canned `"too long"` reply when
//!   the content is over the length guard or the classifier's answer
//! - anything else: nothing
//!
//! Profile information attached to a request is recorded first, whatever
//! the request kind, so the responses already carry it.

use std::sync::Arc;

use confab_types::information::Information;
use confab_types::protocol::{
    Classification, DONT_UNDERSTAND_TAG, ENGAGE_TAG, InboundRequest, OutboundResponse,
    RequestKind, TOO_LONG_TAG,
};

use crate::gateway::{Classifier, Engager};
use crate::messages::MessageTable;
use crate::session::store::SessionStore;

/// Default length guard, in characters.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 500;

/// Connection-independent request handler shared by every connection.
///
/// Generic over the gateway implementations so tests can plug in stubs and
/// the binary can pin the concrete ones (see `confab-api`'s `AppState`).
pub struct Dispatcher<C, E> {
    sessions: Arc<SessionStore>,
    classifier: C,
    engager: E,
    messages: Arc<MessageTable>,
    max_content_chars: usize,
}

impl<C, E> Dispatcher<C, E>
where
    C: Classifier,
    E: Engager,
{
    pub fn new(
        sessions: Arc<SessionStore>,
        classifier: C,
        engager: E,
        messages: Arc<MessageTable>,
    ) -> Self {
        Self {
            sessions,
            classifier,
            engager,
            messages,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }

    /// Override the chat length guard.
    pub fn with_max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.max_content_chars = max_content_chars;
        self
    }

    pub fn sessions(&self) -> &Arc<SessionStore> {
        &self.sessions
    }

    pub fn max_content_chars(&self) -> usize {
        self.max_content_chars
    }

    /// Compute every response for `request`, in the order they must be written.
    pub async fn respond(&self, request: &InboundRequest) -> Vec<OutboundResponse> {
        self.remember(request);

        match request.kind {
            RequestKind::Handshake => self.engage(&request.token).await,
            RequestKind::Chat => vec![self.reply(&request.content, &request.token).await],
            RequestKind::Unrecognized(code) => {
                tracing::debug!(code, token = %request.token, "Ignoring unrecognized request type");
                Vec::new()
            }
        }
    }

    /// Record the request's information unless the session already has some.
    fn remember(&self, request: &InboundRequest) {
        if request.information.is_empty() {
            return;
        }
        self.sessions
            .set_if_absent(&request.token, request.information.clone());
    }

    /// Build the engagement burst for a handshake.
    ///
    /// A failing engager yields an empty burst rather than an error.
    pub async fn engage(&self, token: &str) -> Vec<OutboundResponse> {
        let messages = match self.engager.engage(token).await {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(token, error = %err, "Engagement gateway failed, sending nothing");
                Vec::new()
            }
        };

        messages
            .into_iter()
            .map(|content| self.response(content, ENGAGE_TAG.to_string(), token))
            .collect()
    }

    /// Build the single reply for a chat message.
    pub async fn reply(&self, content: &str, token: &str) -> OutboundResponse {
        let Classification { tag, content: text } = if self.exceeds_guard(content) {
            tracing::debug!(token, "Chat content over length guard, using canned reply");
            Classification::new(TOO_LONG_TAG, self.messages.pick(TOO_LONG_TAG))
        } else {
            match self.classifier.classify(content, token).await {
                Ok(classification) => classification,
                Err(err) => {
                    tracing::warn!(token, error = %err, "Classification gateway failed");
                    Classification::new(
                        DONT_UNDERSTAND_TAG,
                        self.messages.pick(DONT_UNDERSTAND_TAG),
                    )
                }
            }
        };

        self.response(text, tag, token)
    }

    fn exceeds_guard(&self, content: &str) -> bool {
        // Byte length is an upper bound on char count; skip the scan when short.
        content.len() > self.max_content_chars
            && content.chars().count() > self.max_content_chars
    }

    fn response(&self, content: String, tag: String, token: &str) -> OutboundResponse {
        OutboundResponse {
            content,
            tag,
            information: self.current_information(token),
        }
    }

    fn current_information(&self, token: &str) -> Information {
        self.sessions.get(token)
    }
}
