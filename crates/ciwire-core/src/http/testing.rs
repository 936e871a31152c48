//! Transport test doubles shared by the request-pipeline tests
//!
//! `MockTransport` stands in for the injected capability: it records every
//! `(url, options)` pair it is sent and replies with a canned response or
//! rejection, so tests can assert on exactly what the builders put on the wire.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Mutex;

use crate::http::transport::{RequestOptions, Transport, TransportError, TransportResponse};

/// One observed transport invocation
#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub options: RequestOptions,
}

/// A transport that replies from a script and records its calls
pub(crate) struct MockTransport {
    result: std::result::Result<TransportResponse, TransportError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    /// Reply to every call with the given response
    pub fn replying(response: TransportResponse) -> Self {
        Self {
            result: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply 200 OK with a JSON body
    pub fn replying_json(body: Value) -> Self {
        Self::replying(TransportResponse::new(StatusCode::OK, "OK", body.to_string()))
    }

    /// Reply with a bare status; the body is irrelevant on error paths
    pub fn replying_status(status: u16, status_text: &str) -> Self {
        Self::replying(TransportResponse::new(
            StatusCode::from_u16(status).unwrap(),
            status_text,
            "oh no",
        ))
    }

    /// Reject every call with the given reason
    pub fn rejecting(reason: &str) -> Self {
        Self {
            result: Err(TransportError::new(reason)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// All calls observed so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The single call a one-shot run must have made
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> std::result::Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            url: url.to_string(),
            options,
        });
        self.result.clone()
    }
}
