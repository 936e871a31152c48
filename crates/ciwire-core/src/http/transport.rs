//! The injected transport capability
//!
//! The request builders never perform network I/O themselves; they hand a
//! resolved URL and assembled options to a [`Transport`] supplied by the
//! caller at run time. Production code injects [`ReqwestTransport`]; tests
//! inject a recording mock. The capability owns any pooling, timeout, or
//! concurrency concerns.
//!
//! Copyright (c) 2025 Ciwire Team
//! Licensed under the Apache-2.0 license

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;

/// Options handed to the transport alongside the resolved URL
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method; GET unless overridden by the caller's fetch options
    pub method: Method,
    /// Fully merged headers (builder defaults plus caller overrides)
    pub headers: HashMap<String, String>,
    /// Encoded request body, if any
    pub body: Option<String>,
}

/// A buffered HTTP response as seen by the request pipeline
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Status text reported by the server
    pub status_text: String,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Create a response from its parts
    pub fn new(status: StatusCode, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Whether the status is in the success range (2xx)
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the buffered body as JSON
    pub fn json(&self) -> crate::Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// The reason a transport call was rejected before a response arrived
///
/// Network, DNS, and timeout failures all surface here. The message is the
/// transport's own description of the failure and ends up embedded in the
/// classified fetch error.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    /// Create a transport error from a rejection reason
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Capability for performing one HTTP call
///
/// Implementations must make exactly one attempt per `send`; retries belong to
/// the caller, never the pipeline.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the HTTP call described by `url` and `options`
    async fn send(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> std::result::Result<TransportResponse, TransportError>;
}

/// Production transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport over an existing client (shared pool, custom timeouts)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let target = url::Url::parse(url)
            .map_err(|e| TransportError::new(format!("Invalid URL {}: {}", url, e)))?;

        let mut request = self.client.request(options.method, target);
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let status_text = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = response.text().await?;

        Ok(TransportResponse::new(status, status_text, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_options_default_to_get() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.headers.is_empty());
        assert!(options.body.is_none());
    }

    #[test]
    fn test_response_ok_tracks_status_range() {
        let success = TransportResponse::new(StatusCode::OK, "OK", "{}");
        assert!(success.ok());

        let created = TransportResponse::new(StatusCode::CREATED, "Created", "{}");
        assert!(created.ok());

        let failure =
            TransportResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "");
        assert!(!failure.ok());
    }

    #[test]
    fn test_response_json_decoding() {
        let response = TransportResponse::new(StatusCode::OK, "OK", r#"{"my_msg":"hello"}"#);
        assert_eq!(response.json().unwrap(), json!({"my_msg": "hello"}));

        let garbage = TransportResponse::new(StatusCode::OK, "OK", "not json");
        assert!(garbage.json().is_err());
    }

    #[tokio::test]
    async fn test_reqwest_transport_rejects_unparseable_url() {
        let transport = ReqwestTransport::new();
        let result = transport
            .send("not a url at all", RequestOptions::default())
            .await;
        let err = result.unwrap_err();
        assert!(err.message.contains("Invalid URL"));
    }
}
