//! Core types for request configuration
//!
//! Request descriptors are plain data: a config is assembled by the caller,
//! handed to a builder, and consumed when the request is run. Nothing in here
//! performs I/O or holds credentials.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::{Error, Result};

/// Configuration for a CircleCI API request
///
/// `url`, when set, is used verbatim as the target endpoint instead of joining
/// `path` onto the CircleCI API base. The authentication token is never part of
/// the config; it is supplied at run time via [`crate::http::CircleAuth`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CircleConfig {
    /// Path relative to the CircleCI v1.1 API base
    pub path: String,
    /// Full target URL, overriding the base + path assembly
    pub url: Option<String>,
    /// Caller-supplied transport overrides
    pub fetch_opts: FetchOpts,
    /// When true, the response body is returned without key translation
    pub raw: bool,
}

/// Configuration for a GitHub API request
///
/// GitHub requests always target the fixed API base; there is no URL override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// Path relative to the GitHub API base
    pub path: String,
    /// Caller-supplied transport overrides
    pub fetch_opts: FetchOpts,
    /// When true, the response body is returned without key translation
    pub raw: bool,
}

/// Caller-supplied overrides merged into the transport call
///
/// Headers merge key-by-key over the builder's defaults, with the caller
/// winning on conflicts. `method` and `body` replace the defaults wholesale
/// when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchOpts {
    /// Extra request headers; a key present here overrides the builder default
    pub headers: HashMap<String, String>,
    /// HTTP method name; GET when absent
    pub method: Option<String>,
    /// Request body
    pub body: Option<RequestBody>,
}

/// A request body, either pre-encoded or structured
///
/// A `Text` body passes through to the transport unchanged, even if the caller
/// also set a `Content-Type` header that disagrees with it. A `Json` body is
/// serialized by the builder (the GitHub builder additionally translates its
/// keys to snake_case first).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestBody {
    /// Already-encoded body, sent as-is
    Text(String),
    /// Structured body, serialized to a JSON string by the builder
    Json(Value),
}

impl FetchOpts {
    /// Merge these overrides over a set of default headers
    ///
    /// Per-key precedence: a caller-supplied header replaces the default with
    /// the same name, defaults without an override survive untouched.
    pub fn merged_headers(
        &self,
        defaults: &[(&str, String)],
    ) -> HashMap<String, String> {
        let mut headers: HashMap<String, String> = defaults
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect();
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Resolve the HTTP method for this request, defaulting to GET
    pub fn resolve_method(&self) -> Result<Method> {
        let Some(name) = &self.method else {
            return Ok(Method::GET);
        };
        match name.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "DELETE" => Ok(Method::DELETE),
            "PATCH" => Ok(Method::PATCH),
            "HEAD" => Ok(Method::HEAD),
            other => Err(Error::HttpRequest {
                message: format!("Unsupported HTTP method: {}", other),
            }),
        }
    }
}
