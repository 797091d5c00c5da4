//! Mock repository data source for testing.
//!
//! Provides a `MockRepoDataSource` that implements the pipeline's data
//! source seam without making API calls. Responses are configured per
//! repository; every call is recorded for verification.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ApiError, Error};
use crate::leaderboard::RepoDataSource;
use crate::types::{RawContributor, Repository};

/// Record of a data source call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Method name ("fetch_contributors" or "fetch_repository")
    pub method: String,
    /// The `owner/name` the call targeted
    pub target: String,
}

/// Configured outcome for one repository's fetches.
enum Stub<T> {
    Data(T),
    Failure(String),
}

impl<T: Clone> Stub<T> {
    fn to_result(&self) -> Result<T, Error> {
        match self {
            Self::Data(data) => Ok(data.clone()),
            Self::Failure(message) => Err(Error::Api(ApiError::Server {
                status: 500,
                message: message.clone(),
            })),
        }
    }
}

/// Mock data source with per-repository configurable responses.
///
/// Unstubbed repositories return an empty contributor list and a bare
/// `Repository` carrying just the name, so tests only configure what they
/// assert on.
///
/// # Example
///
/// ```rust
/// use contriboard::testing::MockRepoDataSource;
///
/// let source = MockRepoDataSource::new();
/// source.stub_contributors("acme", "widgets", vec![]);
/// source.fail_contributors("acme", "gadgets", "boom");
///
/// assert!(!source.was_called("fetch_contributors"));
/// ```
#[derive(Default)]
pub struct MockRepoDataSource {
    calls: Mutex<Vec<MockCall>>,
    contributor_stubs: Mutex<HashMap<String, Stub<Vec<RawContributor>>>>,
    repository_stubs: Mutex<HashMap<String, Stub<Repository>>>,
}

impl MockRepoDataSource {
    /// Create a new mock data source with no stubs configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the contributor list returned for a repository.
    pub fn stub_contributors(&self, owner: &str, name: &str, contributors: Vec<RawContributor>) {
        self.contributor_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key(owner, name), Stub::Data(contributors));
    }

    /// Make contributor fetches for a repository fail.
    pub fn fail_contributors(&self, owner: &str, name: &str, message: &str) {
        self.contributor_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key(owner, name), Stub::Failure(message.to_string()));
    }

    /// Configure the metadata returned for a repository.
    pub fn stub_repository(&self, owner: &str, name: &str, repository: Repository) {
        self.repository_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key(owner, name), Stub::Data(repository));
    }

    /// Make metadata fetches for a repository fail.
    pub fn fail_repository(&self, owner: &str, name: &str, message: &str) {
        self.repository_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key(owner, name), Stub::Failure(message.to_string()));
    }

    /// Check if a method was called at least once.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => calls.iter().filter(|call| call.method == m).cloned().collect(),
            None => calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn record_call(&self, method: &str, owner: &str, name: &str) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(MockCall {
                method: method.to_string(),
                target: key(owner, name),
            });
    }
}

fn key(owner: &str, name: &str) -> String {
    format!("{owner}/{name}")
}

#[async_trait]
impl RepoDataSource for MockRepoDataSource {
    async fn fetch_contributors(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<Vec<RawContributor>, Error> {
        self.record_call("fetch_contributors", owner, name);

        self.contributor_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key(owner, name))
            .map_or(Ok(Vec::new()), Stub::to_result)
    }

    async fn fetch_repository(&self, owner: &str, name: &str) -> Result<Repository, Error> {
        self.record_call("fetch_repository", owner, name);

        let default = Repository {
            name: name.to_string(),
            description: None,
            stargazers_count: 0,
            forks_count: 0,
            open_issues_count: 0,
            homepage: None,
            private: false,
        };

        self.repository_stubs
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key(owner, name))
            .map_or(Ok(default), Stub::to_result)
    }
}
