//! Configuration loaded from environment variables.

use std::env;

use crate::types::TrackedRepo;

/// Default set of tracked repositories.
const DEFAULT_TRACKED_REPOS: &[(&str, &str)] = &[
    ("byteom", "quiz-lab"),
    ("byteom", "my-portfolio"),
    ("vaishnavirajj", "Task-Management-Board"),
    ("ankit071105", "Ticket-Booking"),
];

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API
    pub api_base: String,
    /// Bearer token for API requests
    pub token: String,
    /// Repositories to aggregate, in leaderboard order
    pub tracked_repos: Vec<TrackedRepo>,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `GITHUB_TOKEN` is required. `GITHUB_API_URL`, `TRACKED_REPOS`
    /// (comma-separated `owner/name` pairs), and `REQUEST_TIMEOUT_SECS`
    /// fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token =
            env::var("GITHUB_TOKEN").map_err(|_| ConfigError::MissingEnvVar("GITHUB_TOKEN"))?;

        let api_base = env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| crate::transport::DEFAULT_BASE_URL.to_string());

        let tracked_repos = match env::var("TRACKED_REPOS") {
            Ok(raw) => parse_tracked_repos(&raw)?,
            Err(_) => default_tracked_repos(),
        };

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS", "expected an integer".to_string())
            })?;

        Ok(Self {
            api_base,
            token,
            tracked_repos,
            request_timeout_secs,
        })
    }
}

/// The built-in tracked repository list.
#[must_use]
pub fn default_tracked_repos() -> Vec<TrackedRepo> {
    DEFAULT_TRACKED_REPOS
        .iter()
        .map(|(owner, name)| TrackedRepo::new(*owner, *name))
        .collect()
}

fn parse_tracked_repos(raw: &str) -> Result<Vec<TrackedRepo>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse()
                .map_err(|e| ConfigError::InvalidValue("TRACKED_REPOS", e))
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracked_repos() {
        let repos = default_tracked_repos();

        assert_eq!(repos.len(), 4);
        assert_eq!(repos[0], TrackedRepo::new("byteom", "quiz-lab"));
        assert_eq!(repos[3], TrackedRepo::new("ankit071105", "Ticket-Booking"));
    }

    #[test]
    fn test_parse_tracked_repos() {
        let repos =
            parse_tracked_repos("octo/alpha, octo/beta ,other/gamma").expect("Should parse");

        assert_eq!(repos.len(), 3);
        assert_eq!(repos[1], TrackedRepo::new("octo", "beta"));
    }

    #[test]
    fn test_parse_tracked_repos_rejects_malformed_entry() {
        let result = parse_tracked_repos("octo/alpha,not-a-repo");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue("TRACKED_REPOS", _))
        ));
    }

    #[test]
    fn test_parse_tracked_repos_skips_empty_entries() {
        let repos = parse_tracked_repos("octo/alpha,,").expect("Should parse");
        assert_eq!(repos.len(), 1);
    }
}
