//! Stub gateways and transports shared by the dispatcher tests.

use std::collections::HashSet;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use futures_util::Sink;

use confab_types::error::GatewayError;
use confab_types::protocol::Classification;

use crate::codec::Frame;
use crate::gateway::{Classifier, Engager};

/// Returns a fixed classification and records every call.
#[derive(Clone)]
pub struct StubClassifier {
    answer: Classification,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl StubClassifier {
    pub fn new(tag: &str, content: &str) -> Self {
        Self {
            answer: Classification::new(tag, content),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `(content, token)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Classifier for StubClassifier {
    async fn classify(&self, content: &str, token: &str) -> Result<Classification, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((content.to_string(), token.to_string()));
        Ok(self.answer.clone())
    }
}

pub struct FailingClassifier;

impl Classifier for FailingClassifier {
    async fn classify(&self, _content: &str, _token: &str) -> Result<Classification, GatewayError> {
        Err(GatewayError::Unavailable("connection refused".to_string()))
    }
}

/// Returns the same engagement burst for every token.
#[derive(Clone)]
pub struct StubEngager {
    messages: Vec<String>,
}

impl StubEngager {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }
}

impl Engager for StubEngager {
    async fn engage(&self, _token: &str) -> Result<Vec<String>, GatewayError> {
        Ok(self.messages.clone())
    }
}

pub struct FailingEngager;

impl Engager for FailingEngager {
    async fn engage(&self, _token: &str) -> Result<Vec<String>, GatewayError> {
        Err(GatewayError::Status {
            status: 500,
            body: "boom".to_string(),
        })
    }
}

/// Sink that rejects the writes whose (zero-based) attempt index is listed.
#[derive(Default)]
pub struct FlakySink {
    pub written: Vec<Frame>,
    fail_on: HashSet<usize>,
    attempts: usize,
}

impl FlakySink {
    pub fn failing_on(attempts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            fail_on: attempts.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Sink<Frame> for FlakySink {
    type Error = std::io::Error;

    fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn start_send(self: Pin<&mut Self>, item: Frame) -> Result<(), Self::Error> {
        let this = self.get_mut();
        let attempt = this.attempts;
        this.attempts += 1;
        if this.fail_on.contains(&attempt) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "peer went away",
            ));
        }
        this.written.push(item);
        Ok(())
    }

    fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }
}
