//! Per-connection frame loop.
//!
//! One call to [`Dispatcher::serve`] owns one client connection from the
//! first frame to closure. Failures are contained:
//!
//! - a read error or close ends this connection only (reads are never retried)
//! - an undecodable frame is dropped and the loop waits for the next one
//! - a failed write skips that frame and carries on with the rest
//!
//! Replies use the frame kind of the request that triggered them.

use std::fmt::Display;

use futures_util::{Sink, SinkExt, Stream, StreamExt};

use crate::codec::{self, Frame};
use crate::gateway::{Classifier, Engager};

use super::reply::Dispatcher;

/// Why a connection loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The peer sent a close frame.
    PeerClosed,
    /// The inbound stream ended without a close frame.
    StreamEnded,
    /// Reading from the transport failed.
    ReadError,
}

/// Counters reported when a connection closes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Data frames read from the client.
    pub received: u64,
    /// Frames discarded because they did not decode.
    pub dropped: u64,
    /// Response frames written successfully.
    pub sent: u64,
    /// Response frames lost to encode or write failures.
    pub failed: u64,
}

impl<C, E> Dispatcher<C, E>
where
    C: Classifier,
    E: Engager,
{
    /// Serve one connection until the transport closes.
    pub async fn serve<R, RE, W>(&self, mut reader: R, mut writer: W) -> (ConnectionStats, CloseReason)
    where
        R: Stream<Item = Result<Frame, RE>> + Unpin,
        RE: Display,
        W: Sink<Frame> + Unpin,
        W::Error: Display,
    {
        let mut stats = ConnectionStats::default();

        let reason = loop {
            let frame = match reader.next().await {
                Some(Ok(frame)) => frame,
                Some(Err(err)) => {
                    tracing::debug!(error = %err, "Transport read failed");
                    break CloseReason::ReadError;
                }
                None => break CloseReason::StreamEnded,
            };

            let Some((payload, kind)) = frame.payload() else {
                break CloseReason::PeerClosed;
            };
            stats.received += 1;

            let request = match codec::decode(payload) {
                Ok(request) => request,
                Err(err) => {
                    stats.dropped += 1;
                    tracing::debug!(error = %err, "Dropping undecodable frame");
                    continue;
                }
            };
            tracing::debug!(kind = %request.kind, token = %request.token, "Request received");

            for response in self.respond(&request).await {
                let frame = match codec::encode(&response, kind) {
                    Ok(frame) => frame,
                    Err(err) => {
                        stats.failed += 1;
                        tracing::error!(error = %err, tag = %response.tag, "Dropping unencodable response");
                        continue;
                    }
                };

                match writer.send(frame).await {
                    Ok(()) => stats.sent += 1,
                    Err(err) => {
                        stats.failed += 1;
                        tracing::warn!(error = %err, tag = %response.tag, "Failed to write response frame");
                    }
                }
            }
        };

        (stats, reason)
    }
}
