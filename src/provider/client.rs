//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional per-request credential header
//! - Status and body decoding errors mapped to `ResolveError`
//!
//! Requests are not retried: a failed listing skips the package for this run.

use crate::error::ResolveError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header (the GitHub API rejects requests without one)
pub(crate) const DEFAULT_USER_AGENT: &str = concat!("tagwatch/", env!("CARGO_PKG_VERSION"));

/// A header name and value attached to a single request
pub type AuthHeader = (&'static str, String);

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                ResolveError::network("HTTP client", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and decode the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        auth: Option<AuthHeader>,
        provider: &'static str,
    ) -> Result<T, ResolveError> {
        let mut request = self.client.get(url).header("Accept", "application/json");
        if let Some((name, value)) = auth {
            request = request.header(name, value);
        }

        debug!("GET {}", url);
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ResolveError::network(provider, format!("timeout fetching {}", url))
            } else {
                ResolveError::network(provider, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                provider,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ResolveError::invalid_response(provider, format!("failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Tag {
        name: String,
    }

    #[test]
    fn test_http_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[test]
    fn test_http_client_with_config() {
        let client = HttpClient::with_config(Duration::from_secs(60), "test-agent/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_TIMEOUT, Duration::from_secs(30));
        assert!(DEFAULT_USER_AGENT.starts_with("tagwatch/"));
    }

    #[tokio::test]
    async fn test_get_json_sends_auth_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/tags")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "v1.0.0"}]"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let tags: Vec<Tag> = client
            .get_json(
                &format!("{}/tags", server.url()),
                Some(("Authorization", "Bearer secret".to_string())),
                "GitHub",
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tags[0].name, "v1.0.0");
    }

    #[tokio::test]
    async fn test_get_json_non_success_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/tags")
            .with_status(403)
            .with_body(r#"{"message": "API rate limit exceeded"}"#)
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<Vec<Tag>>(&format!("{}/tags", server.url()), None, "GitHub")
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/tags")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = HttpClient::new().unwrap();
        let err = client
            .get_json::<Vec<Tag>>(&format!("{}/tags", server.url()), None, "Codeberg")
            .await
            .unwrap_err();

        assert!(matches!(err, ResolveError::InvalidResponse { provider: "Codeberg", .. }));
    }
}
