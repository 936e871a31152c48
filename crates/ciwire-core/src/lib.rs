//! ciwire core — request pipeline for the CircleCI and GitHub REST APIs
//!
//! This crate builds outbound HTTP requests to CircleCI and GitHub, normalizes
//! authentication, headers, and body encoding, performs the request through an
//! injected transport capability, and maps the response into an
//! application-friendly JSON value or a typed error.
//!
//! # Main Components
//!
//! - **Request builders**: [`CircleRequest`] and [`GitHubRequest`], cheap
//!   descriptors that perform no I/O until run
//! - **Auth contexts**: [`CircleAuth`] and [`GitHubAuth`], supplying the token
//!   and transport at invocation time
//! - **Transport capability**: the [`Transport`] trait plus the production
//!   [`ReqwestTransport`] adapter
//! - **Key-case translation**: recursive snake_case/camelCase rewriting of
//!   JSON mapping keys
//!
//! # Example
//!
//! ```no_run
//! use ciwire_core::{CircleAuth, CircleConfig, CircleRequest, ReqwestTransport, Result};
//!
//! async fn latest_build() -> Result<serde_json::Value> {
//!     let transport = ReqwestTransport::new();
//!     let request = CircleRequest::new(CircleConfig {
//!         path: "project/gh/owner/repo".to_string(),
//!         ..Default::default()
//!     });
//!     request.run(&CircleAuth::from_env(&transport)?).await
//! }
//! ```

pub mod case;
pub mod error;
pub mod http;
pub mod types;

// Re-export main types for convenience
pub use case::{camelize_keys, decamelize_keys};
pub use error::{Error, Result};
pub use http::{
    CircleAuth, CircleRequest, GitHubAuth, GitHubRequest, ReqwestTransport, RequestOptions,
    Transport, TransportError, TransportResponse,
};
pub use types::{CircleConfig, FetchOpts, GitHubConfig, RequestBody};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
