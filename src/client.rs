//! GitHub API client.
//!
//! Aggregates the resource clients over one shared transport and implements
//! the data-source seam the aggregation pipeline consumes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::clients::{ContributorsClient, ReposClient};
use crate::config::Config;
use crate::error::Error;
use crate::leaderboard::RepoDataSource;
use crate::transport::{HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::types::{RawContributor, Repository};

/// Client for the GitHub REST API.
///
/// # Example
///
/// ```rust,ignore
/// use contriboard::GithubClient;
///
/// let client = GithubClient::new(None, "ghp_...", None)?;
/// let contributors = client.contributors().list("byteom", "quiz-lab").await?;
/// ```
pub struct GithubClient {
    transport: Arc<HttpTransport>,
    repos: ReposClient,
    contributors: ContributorsClient,
}

impl GithubClient {
    /// Create a new GitHub client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for API requests (default: <https://api.github.com>)
    /// * `token` - Bearer token presented on every request
    /// * `timeout` - Per-request timeout (default: 10 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(
        base_url: Option<&str>,
        token: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, token, timeout)?);

        Ok(Self {
            repos: ReposClient::new(Arc::clone(&transport)),
            contributors: ContributorsClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            Some(&config.api_base),
            &config.token,
            Some(Duration::from_secs(config.request_timeout_secs)),
        )
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the contributors client.
    #[must_use]
    pub fn contributors(&self) -> &ContributorsClient {
        &self.contributors
    }

    /// Get the underlying HTTP transport.
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }
}

#[async_trait]
impl RepoDataSource for GithubClient {
    async fn fetch_contributors(&self, owner: &str, name: &str) -> Result<Vec<RawContributor>, Error> {
        self.contributors.list(owner, name).await
    }

    async fn fetch_repository(&self, owner: &str, name: &str) -> Result<Repository, Error> {
        self.repos.get(owner, name).await
    }
}
