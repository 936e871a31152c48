//! HTTP request pipeline for CI and source-host API communication
//!
//! This module provides the request-construction and response-normalization
//! pipeline:
//! - URL assembly with per-API authentication placement
//! - Header merging with caller overrides
//! - Body encoding with key-case translation
//! - Transport invocation through an injected capability
//! - Deterministic status classification into typed errors

pub mod auth;
pub mod circle;
pub mod github;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;


pub use auth::{CircleAuth, GitHubAuth};
pub use circle::{CircleRequest, CIRCLE_API_BASE};
pub use github::{GitHubRequest, GITHUB_ACCEPT, GITHUB_API_BASE};
pub use transport::{
    ReqwestTransport, RequestOptions, Transport, TransportError, TransportResponse,
};

// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
