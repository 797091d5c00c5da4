//! Repository-related data models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One repository to monitor, identified by owner and name.
///
/// Tracked repositories are fixed configuration: the list is supplied at
/// startup and never changes at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedRepo {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl TrackedRepo {
    /// Create a new tracked repository.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TrackedRepo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for TrackedRepo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::new(owner, name))
            }
            _ => Err(format!(
                "Invalid repository reference: {s}. Expected owner/name"
            )),
        }
    }
}

/// Repository metadata as returned by `GET /repos/{owner}/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// Number of stargazers
    #[serde(default)]
    pub stargazers_count: u64,
    /// Number of forks
    #[serde(default)]
    pub forks_count: u64,
    /// Number of open issues
    #[serde(default)]
    pub open_issues_count: u64,
    /// Project homepage, if set
    #[serde(default)]
    pub homepage: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}
