//! Error types for the ciwire core library
//!
//! Every failure a request pipeline can produce is a variant here, using
//! thiserror for ergonomic error definitions. Messages are deterministic and
//! pure functions of the variant's fields, so callers (and tests) can compare
//! errors by their rendered message.

use thiserror::Error;

/// Main error type for ciwire operations
#[derive(Error, Debug)]
pub enum Error {
    /// The transport call to CircleCI itself was rejected (network-level failure)
    #[error("Error fetching from CircleCI ({url}): {reason}")]
    CircleCiFetch { url: String, reason: String },

    /// CircleCI resolved a response with a non-success HTTP status
    #[error("Invalid response from CircleCI ({url}): {status_text}")]
    CircleCiInvalidResponse { url: String, status_text: String },

    /// The transport call to GitHub itself was rejected (network-level failure)
    #[error("Error fetching from GitHub ({url}): {reason}")]
    GitHubFetch { url: String, reason: String },

    /// GitHub resolved a response with a non-success HTTP status other than 401/403
    #[error("Invalid response from GitHub ({url}): {status_text}")]
    GitHubInvalidResponse { url: String, status_text: String },

    /// GitHub responded 401 or 403; the credentials were not accepted
    #[error("GitHub authorization failed ({url}): {status_text}")]
    GitHubAuthorization { url: String, status_text: String },

    /// A response body could not be decoded as JSON
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be assembled from the caller's configuration
    #[error("HTTP request error: {message}")]
    HttpRequest { message: String },

    /// Credential lookup or other configuration failures
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
