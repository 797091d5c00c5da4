//! Error types for the contriboard crate.

use thiserror::Error;

/// Main error type for upstream data access.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error (connect failure, timeout, invalid response body)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON deserialization error (malformed payload)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// GitHub API error (non-2xx response)
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed errors for non-2xx GitHub API responses.
///
/// Each variant corresponds to a status class; `message` carries the
/// `message` field of the GitHub error body when one is present.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Bad or missing credentials (401).
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Access denied, including exhausted rate-limit quota (403).
    #[error("access forbidden: {message}")]
    Forbidden { message: String },

    /// Repository or resource does not exist (404).
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Secondary rate limit (429).
    #[error("rate limited: {message} (retry after {retry_after}s)")]
    RateLimited { message: String, retry_after: u64 },

    /// Request was understood but rejected (422).
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Server-side failure (5xx).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Get the upstream error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::RateLimited { message, .. }
            | Self::Validation { message }
            | Self::Server { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let error = ApiError::NotFound {
            message: "Not Found".to_string(),
        };

        assert_eq!(error.message(), "Not Found");
        assert_eq!(error.to_string(), "not found: Not Found");
    }

    #[test]
    fn test_rate_limited_display_includes_retry_after() {
        let error = ApiError::RateLimited {
            message: "API rate limit exceeded".to_string(),
            retry_after: 30,
        };

        assert!(error.to_string().contains("retry after 30s"));
    }

    #[test]
    fn test_api_error_converts_to_error() {
        let error: Error = ApiError::Server {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
        .into();

        assert!(matches!(error, Error::Api(ApiError::Server { status: 502, .. })));
    }
}
