//! CircleCI request builder
//!
//! Builds one request against the CircleCI v1.1 REST API. CircleCI
//! authenticates via a `circle-token` query parameter, so the token becomes
//! part of the resolved URL at run time.
//!
//! Copyright (c) 2025 Ciwire Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

use crate::case::camelize_keys;
use crate::http::auth::CircleAuth;
use crate::http::transport::RequestOptions;
use crate::types::{CircleConfig, RequestBody};
use crate::{Error, Result};

/// Base URL of the CircleCI v1.1 REST API
pub const CIRCLE_API_BASE: &str = "https://circleci.com/api/v1.1";

/// A reusable descriptor for one CircleCI API request
///
/// Constructing the descriptor performs no I/O; the request happens when
/// [`CircleRequest::run`] is invoked with an auth context. Each `run` makes
/// exactly one transport call.
#[derive(Debug, Clone)]
pub struct CircleRequest {
    config: CircleConfig,
}

impl CircleRequest {
    /// Create a request descriptor from caller configuration
    pub fn new(config: CircleConfig) -> Self {
        Self { config }
    }

    /// Resolve the target URL, token included
    ///
    /// An explicit `config.url` is used verbatim; otherwise the path is joined
    /// onto the API base. The token query parameter is appended with `?` or
    /// `&` depending on whether the target already carries a query string.
    fn resolved_url(&self, api_token: &str) -> String {
        let target = match &self.config.url {
            Some(url) => url.clone(),
            None => format!("{}/{}", CIRCLE_API_BASE, self.config.path),
        };
        let separator = if target.contains('?') { '&' } else { '?' };
        format!("{}{}circle-token={}", target, separator, api_token)
    }

    /// Perform the request and normalize the response
    ///
    /// # Errors
    ///
    /// [`Error::CircleCiFetch`] when the transport rejects the call,
    /// [`Error::CircleCiInvalidResponse`] when the HTTP status is outside the
    /// success range, [`Error::Json`] when a successful body fails to decode.
    pub async fn run(&self, auth: &CircleAuth<'_>) -> Result<Value> {
        let url = self.resolved_url(&auth.api_token);
        let method = self.config.fetch_opts.resolve_method()?;
        let headers = self
            .config
            .fetch_opts
            .merged_headers(&[("Accept", "application/json".to_string())]);
        let body = match &self.config.fetch_opts.body {
            Some(RequestBody::Text(text)) => Some(text.clone()),
            Some(RequestBody::Json(value)) => Some(value.to_string()),
            None => None,
        };

        // The token is in the URL; log the unauthenticated target only.
        log::debug!(
            "CircleCI request: {} {}",
            method,
            self.config.url.as_deref().unwrap_or(&self.config.path)
        );

        let options = RequestOptions {
            method,
            headers,
            body,
        };
        let response = auth
            .transport
            .send(&url, options)
            .await
            .map_err(|e| Error::CircleCiFetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if !response.ok() {
            return Err(Error::CircleCiInvalidResponse {
                url,
                status_text: response.status_text,
            });
        }

        let decoded = response.json()?;
        if self.config.raw {
            Ok(decoded)
        } else {
            Ok(camelize_keys(&decoded))
        }
    }
}
