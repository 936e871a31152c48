//! GitHub request builder
//!
//! Builds one request against the GitHub REST API. GitHub authenticates via
//! the `Authorization` header, so the token never appears in the URL, and
//! structured request bodies are translated to the API's snake_case wire
//! format before serialization.
//!
//! Copyright (c) 2025 Ciwire Team
//! Licensed under the Apache-2.0 license

use reqwest::StatusCode;
use serde_json::Value;

use crate::case::{camelize_keys, decamelize_keys};
use crate::http::auth::GitHubAuth;
use crate::http::transport::RequestOptions;
use crate::types::{GitHubConfig, RequestBody};
use crate::{Error, Result};

/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Accept header pinning the v3 wire format
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// A reusable descriptor for one GitHub API request
///
/// Constructing the descriptor performs no I/O; the request happens when
/// [`GitHubRequest::run`] is invoked with an auth context. Each `run` makes
/// exactly one transport call.
#[derive(Debug, Clone)]
pub struct GitHubRequest {
    config: GitHubConfig,
}

impl GitHubRequest {
    /// Create a request descriptor from caller configuration
    pub fn new(config: GitHubConfig) -> Self {
        Self { config }
    }

    /// Resolve the target URL; the token is never part of it
    fn resolved_url(&self) -> String {
        format!("{}/{}", GITHUB_API_BASE, self.config.path)
    }

    /// Encode the request body for the wire
    ///
    /// A structured body has its keys translated to snake_case and is then
    /// serialized; a body that is already a string passes through unchanged,
    /// whatever the caller's `Content-Type` says.
    fn encoded_body(&self) -> Option<String> {
        match &self.config.fetch_opts.body {
            Some(RequestBody::Text(text)) => Some(text.clone()),
            Some(RequestBody::Json(value)) => Some(decamelize_keys(value).to_string()),
            None => None,
        }
    }

    /// Perform the request and normalize the response
    ///
    /// # Errors
    ///
    /// [`Error::GitHubFetch`] when the transport rejects the call,
    /// [`Error::GitHubAuthorization`] on HTTP 401/403,
    /// [`Error::GitHubInvalidResponse`] on any other non-success status,
    /// [`Error::Json`] when a successful body fails to decode.
    pub async fn run(&self, auth: &GitHubAuth<'_>) -> Result<Value> {
        let url = self.resolved_url();
        let method = self.config.fetch_opts.resolve_method()?;
        let headers = self.config.fetch_opts.merged_headers(&[
            ("Accept", GITHUB_ACCEPT.to_string()),
            ("Authorization", format!("token {}", auth.api_token)),
        ]);
        let body = self.encoded_body();

        log::debug!("GitHub request: {} {}", method, url);

        let options = RequestOptions {
            method,
            headers,
            body,
        };
        let response = auth
            .transport
            .send(&url, options)
            .await
            .map_err(|e| Error::GitHubFetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        if response.status == StatusCode::UNAUTHORIZED || response.status == StatusCode::FORBIDDEN {
            return Err(Error::GitHubAuthorization {
                url,
                status_text: response.status_text,
            });
        }
        if !response.ok() {
            return Err(Error::GitHubInvalidResponse {
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
