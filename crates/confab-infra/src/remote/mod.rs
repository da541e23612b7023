//! HTTP clients for the external classification and engagement services.
//!
//! Both services speak JSON over `POST`. Transport failures map to
//! [`GatewayError::Unavailable`], non-2xx answers to [`GatewayError::Status`],
//! and bodies that do not match the expected shape to
//! [`GatewayError::InvalidResponse`]. Nothing is retried.

pub mod classifier;
pub mod engager;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use confab_types::error::GatewayError;

pub use classifier::RemoteClassifier;
pub use engager::RemoteEngager;

/// Build the shared HTTP client with the configured per-call timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Unavailable(format!("failed to build HTTP client: {e}")))
}

/// POST `body` as JSON to `endpoint` and decode the JSON answer.
async fn post_json<B, R>(client: &reqwest::Client, endpoint: &str, body: &B) -> Result<R, GatewayError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let response = client
        .post(endpoint)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::Unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
}
