//! Contributor leaderboard aggregation over the GitHub REST API.
//!
//! Fetches contributor lists for a fixed set of tracked repositories,
//! merges them by login, derives scores and badges, and produces a ranked
//! leaderboard plus per-repository project views. Search filtering and
//! pagination are read-only transforms over the ranked output.
//!
//! # Quick Start
//!
//! ```rust
//! use contriboard::testing::MockRepoDataSource;
//! use contriboard::{LeaderboardService, TrackedRepo};
//!
//! let source = MockRepoDataSource::new();
//! source.stub_contributors("acme", "widgets", vec![]);
//!
//! let service = LeaderboardService::new(source);
//! let tracked = vec![TrackedRepo::new("acme", "widgets")];
//!
//! let board = futures::executor::block_on(service.build_leaderboard(&tracked));
//! assert!(board.is_empty());
//! ```
//!
//! Against the real API, construct the data source from configuration:
//!
//! ```rust,ignore
//! use contriboard::{Config, GithubClient, LeaderboardService};
//!
//! let config = Config::from_env()?;
//! let client = GithubClient::from_config(&config)?;
//! let service = LeaderboardService::new(client);
//! let board = service.build_leaderboard(&config.tracked_repos).await;
//! ```

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod scoring;
pub mod testing;
pub mod transport;
pub mod types;
pub mod view;

// Re-exports
pub use client::GithubClient;
pub use clients::{ContributorsClient, ReposClient};
pub use config::{default_tracked_repos, Config, ConfigError};
pub use error::{ApiError, Error};
pub use leaderboard::{annotate_contributors, LeaderboardService, RepoDataSource};
pub use scoring::{score, Badge, SCORE_MULTIPLIER};
pub use transport::{HttpTransport, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{
    AggregatedContributor, ProjectDetail, ProjectSummary, RawContributor, Repository,
    ScoredContributor, TrackedRepo,
};
pub use view::{filter_by_login, page_count, paginate, top_performers, PAGE_SIZE, TOP_PERFORMERS};
