//! RemoteClassifier -- [`Classifier`] backed by an external intent service.
//!
//! Request:  `{"content": "...", "user_token": "..."}`
//! Response: `{"tag": "...", "content": "..."}`

use std::time::Duration;

use serde::{Deserialize, Serialize};

use confab_core::gateway::Classifier;
use confab_types::error::GatewayError;
use confab_types::protocol::Classification;

use super::{build_client, post_json};

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    content: &'a str,
    user_token: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    tag: String,
    content: String,
}

/// Classifier that POSTs each chat message to `endpoint`.
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteClassifier {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for RemoteClassifier {
    async fn classify(&self, content: &str, token: &str) -> Result<Classification, GatewayError> {
        let request = ClassifyRequest {
            content,
            user_token: token,
        };
        let response: ClassifyResponse = post_json(&self.client, &self.endpoint, &request).await?;
        Ok(Classification::new(response.tag, response.content))
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::{Value, json};

    use super::*;
    use crate::remote::test_server;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn classify_posts_content_and_token() {
        let router = Router::new().route(
            "/classify",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "tag": "greeting",
                    "content": format!("Hello {}!", body["user_token"].as_str().unwrap_or("")),
                }))
            }),
        );
        let base = test_server::spawn(router).await;
        let classifier = RemoteClassifier::new(format!("{base}/classify"), TIMEOUT).unwrap();

        let result = classifier.classify("hi", "abc").await.unwrap();
        assert_eq!(result, Classification::new("greeting", "Hello abc!"));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let router = Router::new().route(
            "/classify",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        );
        let base = test_server::spawn(router).await;
        let classifier = RemoteClassifier::new(format!("{base}/classify"), TIMEOUT).unwrap();

        let err = classifier.classify("hi", "abc").await.unwrap_err();
        match err {
            GatewayError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "model loading");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_body_shape_is_invalid_response() {
        let router = Router::new().route(
            "/classify",
            post(|| async { Json(json!({"intent": "greeting"})) }),
        );
        let base = test_server::spawn(router).await;
        let classifier = RemoteClassifier::new(format!("{base}/classify"), TIMEOUT).unwrap();

        let err = classifier.classify("hi", "abc").await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let base = test_server::dead_url().await;
        let classifier = RemoteClassifier::new(format!("{base}/classify"), TIMEOUT).unwrap();

        let err = classifier.classify("hi", "abc").await.unwrap_err();
        assert!(matches!(err, GatewayError::Unavailable(_)));
    }
}
