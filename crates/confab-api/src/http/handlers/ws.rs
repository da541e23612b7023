//! WebSocket handler for the conversation protocol.
//!
//! The configured `ws_path` upgrades an HTTP connection to a WebSocket and
//! hands it to the dispatcher's frame loop. This module only adapts between
//! axum's [`Message`] and the transport-neutral [`Frame`]:
//!
//! - text and binary frames pass through as data
//! - a close frame ends the loop
//! - ping and pong are answered by axum and never reach the dispatcher
//!
//! Each connection runs inside its own `connection` span carrying a fresh
//! id, so every log line for one client can be grouped.

use std::future::ready;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tracing::Instrument;
use uuid::Uuid;

use confab_core::codec::Frame;

use crate::state::AppState;

/// Upgrade an HTTP request to a conversation WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws_connection(socket, state))
}

async fn handle_ws_connection(socket: WebSocket, state: AppState) {
    let span = tracing::info_span!("connection", id = %Uuid::now_v7());

    async move {
        tracing::info!("WebSocket connection opened");

        let (ws_sender, ws_receiver) = socket.split();
        let reader = ws_receiver.filter_map(|message| {
            ready(match message {
                Ok(message) => inbound_frame(message).map(Ok),
                Err(err) => Some(Err(err)),
            })
        });
        let writer = ws_sender.with(|frame: Frame| ready(Ok::<_, axum::Error>(outbound_message(frame))));

        let (stats, reason) = state.dispatcher.serve(reader, Box::pin(writer)).await;

        tracing::info!(
            ?reason,
            received = stats.received,
            dropped = stats.dropped,
            sent = stats.sent,
            failed = stats.failed,
            "WebSocket connection closed"
        );
    }
    .instrument(span)
    .await;
}

/// Map a client message to a dispatcher frame. Control frames yield `None`.
fn inbound_frame(message: Message) -> Option<Frame> {
    match message {
        Message::Text(text) => Some(Frame::Text(text.as_str().to_owned())),
        Message::Binary(bytes) => Some(Frame::Binary(bytes.to_vec())),
        Message::Close(_) => Some(Frame::Close),
        Message::Ping(_) | Message::Pong(_) => None,
    }
}

fn outbound_message(frame: Frame) -> Message {
    match frame {
        Frame::Text(text) => Message::Text(text.into()),
        Frame::Binary(bytes) => Message::Binary(bytes.into()),
        Frame::Close => Message::Close(None),
    }
}
