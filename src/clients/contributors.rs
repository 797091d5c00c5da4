//! Contributors resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::RawContributor;

/// Client for repository contributor listings.
pub struct ContributorsClient {
    transport: Arc<HttpTransport>,
}

impl ContributorsClient {
    /// Create a new contributors client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List contributors for a repository.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `name` - Repository name
    ///
    /// # Returns
    ///
    /// Contributor records in the order the API returns them, which is
    /// contribution count descending.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload is malformed.
    pub async fn list(&self, owner: &str, name: &str) -> Result<Vec<RawContributor>, Error> {
        self.transport
            .get(&format!("/repos/{owner}/{name}/contributors"))
            .await
    }
}
