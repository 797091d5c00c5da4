//! Repositories resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Repository;

/// Client for repository metadata.
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get repository metadata.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `name` - Repository name
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not found or the request fails.
    pub async fn get(&self, owner: &str, name: &str) -> Result<Repository, Error> {
        self.transport.get(&format!("/repos/{owner}/{name}")).await
    }
}
