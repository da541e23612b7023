//! Inbound and outbound message types for the conversational protocol.
//!
//! These are the decoded forms of the JSON frames exchanged over a
//! connection. Wire parsing lives in `confab-core::codec`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::information::Information;

/// Tag attached to every message of a handshake engagement burst.
pub const ENGAGE_TAG: &str = "engage conversation";

/// Tag of the canned reply sent when chat content exceeds the length guard.
pub const TOO_LONG_TAG: &str = "too long";

/// Tag of the canned reply sent when no classification could be produced.
pub const DONT_UNDERSTAND_TAG: &str = "don't understand";

/// What a client asked for, derived from the numeric `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// `type = 0`: register profile information and receive engagement messages.
    Handshake,
    /// `type = 1`: a chat message to classify.
    Chat,
    /// Any other value. Accepted by the decoder, answered with nothing.
    Unrecognized(i64),
}

impl RequestKind {
    /// Map a wire code to a kind.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => RequestKind::Handshake,
            1 => RequestKind::Chat,
            other => RequestKind::Unrecognized(other),
        }
    }

    /// The wire code for this kind.
    pub fn code(&self) -> i64 {
        match self {
            RequestKind::Handshake => 0,
            RequestKind::Chat => 1,
            RequestKind::Unrecognized(code) => *code,
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Handshake => write!(f, "handshake"),
            RequestKind::Chat => write!(f, "chat"),
            RequestKind::Unrecognized(code) => write!(f, "unrecognized({code})"),
        }
    }
}

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundRequest {
    pub kind: RequestKind,
    /// Raw chat text. Ignored for handshakes.
    pub content: String,
    /// Opaque session token chosen by the client.
    pub token: String,
    /// Profile information attached to this frame, possibly empty.
    pub information: Information,
}

impl InboundRequest {
    /// A handshake request for `token`.
    pub fn handshake(token: impl Into<String>, information: Information) -> Self {
        Self {
            kind: RequestKind::Handshake,
            content: String::new(),
            token: token.into(),
            information,
        }
    }

    /// A chat request for `token` without attached information.
    pub fn chat(token: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Chat,
            content: content.into(),
            token: token.into(),
            information: Information::default(),
        }
    }
}

/// One reply frame sent back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundResponse {
    pub content: String,
    /// Why this message was produced (intent tag, `"too long"`, ...).
    pub tag: String,
    /// The session's current information at the time of the reply.
    pub information: Information,
}

/// Result of classifying a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub tag: String,
    pub content: String,
}

impl Classification {
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_from_code() {
        assert_eq!(RequestKind::from_code(0), RequestKind::Handshake);
        assert_eq!(RequestKind::from_code(1), RequestKind::Chat);
        assert_eq!(RequestKind::from_code(7), RequestKind::Unrecognized(7));
        assert_eq!(RequestKind::from_code(-1).code(), -1);
    }

    #[test]
    fn request_kind_display() {
        assert_eq!(RequestKind::Handshake.to_string(), "handshake");
        assert_eq!(RequestKind::Unrecognized(3).to_string(), "unrecognized(3)");
    }

    #[test]
    fn outbound_response_wire_shape() {
        let response = OutboundResponse {
            content: "Hi Alice".to_string(),
            tag: "greeting".to_string(),
            information: Information::new().with("name", "Alice"),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": "Hi Alice",
                "tag": "greeting",
                "information": {"name": "Alice"}
            })
        );
    }
}
