//! JSON frame codec for the conversational protocol.
//!
//! Inbound frames carry `{"type", "content", "user_token", "information"}`;
//! outbound frames carry `{"content", "tag", "information"}`. Only `type`
//! is mandatory on the way in; the other fields default to empty.

use serde::Deserialize;

use confab_types::error::CodecError;
use confab_types::information::Information;
use confab_types::protocol::{InboundRequest, OutboundResponse, RequestKind};

/// Whether a frame travelled as WebSocket text or binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Text,
    Binary,
}

/// A transport-level message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
    /// The peer asked to close the connection.
    Close,
}

impl Frame {
    /// Payload bytes and kind, or `None` for a close frame.
    pub fn payload(&self) -> Option<(&[u8], FrameKind)> {
        match self {
            Frame::Text(text) => Some((text.as_bytes(), FrameKind::Text)),
            Frame::Binary(bytes) => Some((bytes.as_slice(), FrameKind::Binary)),
            Frame::Close => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RequestFrame {
    /// Absent `type` reads as 0, a handshake.
    #[serde(rename = "type", default)]
    kind: i64,
    #[serde(default)]
    content: String,
    #[serde(default)]
    user_token: String,
    /// Clients send `{}`, `null`, or nothing when they have no profile yet.
    #[serde(default)]
    information: Option<Information>,
}

/// Parse one inbound payload into a request.
///
/// Unknown `type` values decode successfully as [`RequestKind::Unrecognized`].
pub fn decode(payload: &[u8]) -> Result<InboundRequest, CodecError> {
    let frame: RequestFrame =
        serde_json::from_slice(payload).map_err(|e| CodecError::Decode(e.to_string()))?;

    Ok(InboundRequest {
        kind: RequestKind::from_code(frame.kind),
        content: frame.content,
        token: frame.user_token,
        information: frame.information.unwrap_or_default(),
    })
}

/// Serialize a response into a frame of the given kind.
pub fn encode(response: &OutboundResponse, kind: FrameKind) -> Result<Frame, CodecError> {
    let frame = match kind {
        FrameKind::Text => Frame::Text(
            serde_json::to_string(response).map_err(|e| CodecError::Encode(e.to_string()))?,
        ),
        FrameKind::Binary => Frame::Binary(
            serde_json::to_vec(response).map_err(|e| CodecError::Encode(e.to_string()))?,
        ),
    };
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_handshake_with_information() {
        let request = decode(
            br#"{"type":0,"content":"","user_token":"abc","information":{"name":"Alice"}}"#,
        )
        .unwrap();

        assert_eq!(request.kind, RequestKind::Handshake);
        assert_eq!(request.token, "abc");
        assert_eq!(request.information, Information::new().with("name", "Alice"));
    }

    #[test]
    fn decode_chat_without_optional_fields() {
        let request = decode(br#"{"type":1,"content":"hello","user_token":"abc"}"#).unwrap();
        assert_eq!(request.kind, RequestKind::Chat);
        assert_eq!(request.content, "hello");
        assert!(request.information.is_empty());
    }

    #[test]
    fn decode_null_information_is_empty() {
        let request = decode(br#"{"type":1,"user_token":"abc","information":null}"#).unwrap();
        assert!(request.information.is_empty());
        assert_eq!(request.content, "");
    }

    #[test]
    fn decode_unknown_type_is_accepted() {
        let request = decode(br#"{"type":42,"user_token":"abc"}"#).unwrap();
        assert_eq!(request.kind, RequestKind::Unrecognized(42));
    }

    #[test]
    fn decode_missing_type_is_handshake() {
        let request =
            decode(br#"{"user_token":"abc","information":{"name":"Alice"}}"#).unwrap();
        assert_eq!(request.kind, RequestKind::Handshake);
        assert_eq!(request.information, Information::new().with("name", "Alice"));

        let request = decode(br#"{"content":"no type"}"#).unwrap();
        assert_eq!(request.kind, RequestKind::Handshake);
        assert_eq!(request.content, "no type");
    }

    #[test]
    fn decode_rejects_malformed_frames() {
        let payloads: [&[u8]; 5] = [
            b"not json",
            br#"{"type":"chat","user_token":"abc"}"#,
            br#"{"type":1,"user_token":42}"#,
            br#"{"type":1,"information":["not","an","object"]}"#,
            br#"[1,2,3]"#,
        ];
        for payload in payloads {
            let err = decode(payload).unwrap_err();
            assert!(matches!(err, CodecError::Decode(_)), "payload {payload:?}");
        }
    }

    #[test]
    fn encode_text_frame() {
        let response = OutboundResponse {
            content: "Hello Alice".to_string(),
            tag: "greeting".to_string(),
            information: Information::new().with("name", "Alice"),
        };

        let frame = encode(&response, FrameKind::Text).unwrap();
        let Frame::Text(json) = frame else {
            panic!("expected text frame, got {frame:?}");
        };
        let parsed: OutboundResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn encode_binary_frame_keeps_kind() {
        let response = OutboundResponse {
            content: "hi".to_string(),
            tag: "greeting".to_string(),
            information: Information::new(),
        };
        let frame = encode(&response, FrameKind::Binary).unwrap();
        let (payload, kind) = frame.payload().unwrap();
        assert_eq!(kind, FrameKind::Binary);
        assert!(std::str::from_utf8(payload).unwrap().contains(r#""information":{}"#));
    }

    #[test]
    fn close_frame_has_no_payload() {
        assert!(Frame::Close.payload().is_none());
    }
}
