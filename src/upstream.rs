//! Client for the upstream weather provider (WeatherStack).
//!
//! One outbound GET per fetch, no retry, no timeout override beyond the
//! transport default. The provider signals some rejections (e.g. an unknown
//! location) inside an otherwise-200 body, so a successful fetch requires
//! status 200, a JSON body, and no embedded `error` object.

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Fallback message when the provider's error object carries no `info` text.
const GENERIC_PROVIDER_ERROR: &str = "WeatherStack API error";

/// Failure classes for one upstream fetch.
///
/// `Status` and `Transport` both map to an outward 502; `Logical` means the
/// provider understood the request but rejected the query, which maps to an
/// outward 400 carrying the provider's message. The two classes are kept
/// distinct deliberately.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network failure, or a body that could not be read or parsed as JSON.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-200 status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Provider answered 200 but embedded an error object in the body.
    /// Carries the provider's human-readable message verbatim.
    #[error("{0}")]
    Logical(String),
}

/// Upstream weather provider client.
///
/// The access credential is injected at construction and reused for every
/// call; nothing here reads the environment.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Client::new(),
        }
    }

    /// Fetch current conditions for a location.
    ///
    /// The location is passed through as-is; semantic validation ("is this a
    /// real place") is the provider's job and surfaces as a `Logical` error.
    pub async fn fetch(&self, location: &str) -> Result<Value, UpstreamError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("access_key", self.api_key.as_str()), ("query", location)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status));
        }

        let body: Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let message = error
                .get("info")
                .and_then(Value::as_str)
                .unwrap_or(GENERIC_PROVIDER_ERROR)
                .to_string();
            return Err(UpstreamError::Logical(message));
        }

        Ok(body)
    }
}
