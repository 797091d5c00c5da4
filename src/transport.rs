//! HTTP transport for the GitHub REST API.
//!
//! Handles authenticated GET requests, response deserialization, and the
//! mapping of non-2xx responses into typed errors.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Error};

/// Default base URL for the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default request timeout in seconds.
///
/// The upstream transport has no inherent deadline; a fixed conservative
/// timeout keeps a wedged connection from stalling a whole fetch cycle.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP transport layer with bearer authentication.
///
/// Holds the static API credential, read once at construction and reused
/// read-only for every request.
pub struct HttpTransport {
    base_url: String,
    token: String,
    client: Client,
}

impl HttpTransport {
    /// Create a new HTTP transport.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (e.g., "<https://api.github.com>")
    /// * `token` - Bearer token presented on every request
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            client,
        })
    }

    /// Make an authenticated GET request and deserialize the response.
    ///
    /// # Arguments
    ///
    /// * `path` - API path (e.g., "/repos/byteom/quiz-lab/contributors")
    ///
    /// # Errors
    ///
    /// Returns `Error::Http` on transport failure, `Error::Api` on a non-2xx
    /// status, and `Error::Serialization` on a malformed body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", "contriboard")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.parse_error_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;

        serde_json::from_str(&body).map_err(Error::from)
    }

    /// Parse an error response into a typed error.
    async fn parse_error_response(&self, response: Response) -> Error {
        let status = response.status();
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok());

        let data: Value = response.json().await.unwrap_or_else(|_| serde_json::json!({}));
        let message = data
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or(&format!("HTTP {}", status.as_u16()))
            .to_string();

        let api_error = match status {
            StatusCode::UNAUTHORIZED => ApiError::Authentication { message },
            StatusCode::FORBIDDEN => ApiError::Forbidden { message },
            StatusCode::NOT_FOUND => ApiError::NotFound { message },
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited {
                message,
                retry_after: retry_after.unwrap_or(60),
            },
            s if s.is_server_error() => ApiError::Server {
                status: s.as_u16(),
                message,
            },
            _ => ApiError::Validation { message },
        };

        Error::Api(api_error)
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
