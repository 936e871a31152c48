//! Run-time authentication contexts
//!
//! A request config describes *what* to ask for; an auth context supplies the
//! *credentials and transport* to ask with. Keeping the two apart means one
//! descriptor can be run against different tokens or transports, and no secret
//! ever lives inside a config.

use crate::http::transport::Transport;
use crate::{Error, Result};

/// Environment variable holding the CircleCI API token
const CIRCLE_TOKEN_VAR: &str = "CIRCLE_API_TOKEN";

/// Environment variable holding the GitHub API token
const GITHUB_TOKEN_VAR: &str = "GITHUB_API_TOKEN";

/// Credentials and transport for one CircleCI call
pub struct CircleAuth<'t> {
    /// Token appended to the URL as the `circle-token` query parameter
    pub api_token: String,
    /// Capability performing the actual HTTP call
    pub transport: &'t dyn Transport,
}

impl<'t> CircleAuth<'t> {
    /// Create an auth context with an explicit token
    pub fn new(api_token: impl Into<String>, transport: &'t dyn Transport) -> Self {
        Self {
            api_token: api_token.into(),
            transport,
        }
    }

    /// Create an auth context from the `CIRCLE_API_TOKEN` environment variable
    pub fn from_env(transport: &'t dyn Transport) -> Result<Self> {
        let api_token = std::env::var(CIRCLE_TOKEN_VAR).map_err(|_| Error::Configuration {
            message: format!(
                "CircleCI API token not found. Set the {} environment variable",
                CIRCLE_TOKEN_VAR
            ),
        })?;
        Ok(Self::new(api_token, transport))
    }
}

/// Credentials and transport for one GitHub call
pub struct GitHubAuth<'t> {
    /// Token sent as `Authorization: token <api_token>`
    pub api_token: String,
    /// Capability performing the actual HTTP call
    pub transport: &'t dyn Transport,
}

impl std::fmt::Debug for GitHubAuth<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("api_token", &self.api_token)
            .finish_non_exhaustive()
    }
}

impl<'t> GitHubAuth<'t> {
    /// Create an auth context with an explicit token
    pub fn new(api_token: impl Into<String>, transport: &'t dyn Transport) -> Self {
        Self {
            api_token: api_token.into(),
            transport,
        }
    }

    /// Create an auth context from the `GITHUB_API_TOKEN` environment variable
    pub fn from_env(transport: &'t dyn Transport) -> Result<Self> {
        let api_token = std::env::var(GITHUB_TOKEN_VAR).map_err(|_| Error::Configuration {
            message: format!(
                "GitHub API token not found. Set the {} environment variable",
                GITHUB_TOKEN_VAR
            ),
        })?;
        Ok(Self::new(api_token, transport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::MockTransport;
    use serde_json::json;

    #[test]
    fn test_circle_auth_from_env() {
        // Save original env var value for restoration
        let original = std::env::var(CIRCLE_TOKEN_VAR).ok();

        std::env::set_var(CIRCLE_TOKEN_VAR, "894fuhg");
        let transport = MockTransport::replying_json(json!({}));
        let auth = CircleAuth::from_env(&transport).unwrap();
        assert_eq!(auth.api_token, "894fuhg");

        // Restore original environment state
        match original {
            Some(value) => std::env::set_var(CIRCLE_TOKEN_VAR, value),
            None => std::env::remove_var(CIRCLE_TOKEN_VAR),
        }
    }

    #[test]
    fn test_github_auth_missing_env_var() {
        // Save original env var value for restoration
        let original = std::env::var(GITHUB_TOKEN_VAR).ok();

        std::env::remove_var(GITHUB_TOKEN_VAR);
        let transport = MockTransport::replying_json(json!({}));
        let result = GitHubAuth::from_env(&transport);

        // Restore original environment state before asserting
        if let Some(value) = original {
            std::env::set_var(GITHUB_TOKEN_VAR, value);
        }

        let err = result.unwrap_err();
        assert!(err.to_string().contains("GITHUB_API_TOKEN"));
    }

    #[test]
    fn test_explicit_token_constructors() {
        let transport = MockTransport::replying_json(json!({}));
        let circle = CircleAuth::new("fdlsar32", &transport);
        assert_eq!(circle.api_token, "fdlsar32");

        let github = GitHubAuth::new("fjidq8y32", &transport);
        assert_eq!(github.api_token, "fjidq8y32");
    }
}
