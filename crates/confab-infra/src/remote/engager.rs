//! RemoteEngager -- [`Engager`] backed by an external module host.
//!
//! Request:  `{"user_token": "..."}`
//! Response: `{"messages": ["...", ...]}` (missing `messages` means none)

use std::time::Duration;

use serde::{Deserialize, Serialize};

use confab_core::gateway::Engager;
use confab_types::error::GatewayError;

use super::{build_client, post_json};

#[derive(Serialize)]
struct EngageRequest<'a> {
    user_token: &'a str,
}

#[derive(Deserialize)]
struct EngageResponse {
    #[serde(default)]
    messages: Vec<String>,
}

/// Engager that asks `endpoint` for the messages to open a session with.
pub struct RemoteEngager {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteEngager {
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

impl Engager for RemoteEngager {
    async fn engage(&self, token: &str) -> Result<Vec<String>, GatewayError> {
        let request = EngageRequest { user_token: token };
        let response: EngageResponse = post_json(&self.client, &self.endpoint, &request).await?;
        Ok(response.messages)
    }
}

#[cfg(test)]
mod tests {
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::json;

    use super::*;
    use crate::remote::test_server;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn engage_returns_messages_in_order() {
        let router = Router::new().route(
            "/engage",
            post(|| async {
                Json(json!({"messages": ["Good morning!", "Don't forget your meeting at 10."]}))
            }),
        );
        let base = test_server::spawn(router).await;
        let engager = RemoteEngager::new(format!("{base}/engage"), TIMEOUT).unwrap();

        let messages = engager.engage("abc").await.unwrap();
        assert_eq!(
            messages,
            ["Good morning!", "Don't forget your meeting at 10."]
        );
    }

    #[tokio::test]
    async fn missing_messages_field_is_empty() {
        let router = Router::new().route("/engage", post(|| async { Json(json!({})) }));
        let base = test_server::spawn(router).await;
        let engager = RemoteEngager::new(format!("{base}/engage"), TIMEOUT).unwrap();

        assert!(engager.engage("abc").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn server_error_is_reported() {
        let router = Router::new().route(
            "/engage",
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = test_server::spawn(router).await;
        let engager = RemoteEngager::new(format!("{base}/engage"), TIMEOUT).unwrap();

        let err = engager.engage("abc").await.unwrap_err();
        assert!(matches!(err, GatewayError::Status { status: 500, .. }));
    }
}
