//! Contributor aggregation pipeline.
//!
//! Turns per-repository contributor lists into a deduplicated, scored,
//! ranked leaderboard. The pipeline holds no state between invocations;
//! every call recomputes the full leaderboard from fresh fetches.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use futures::future::join_all;
use tracing::warn;

use crate::error::Error;
use crate::scoring::{score, Badge};
use crate::types::{
    AggregatedContributor, ProjectDetail, ProjectSummary, RawContributor, Repository,
    ScoredContributor, TrackedRepo,
};

/// Upstream data source consumed by the aggregation pipeline.
///
/// Implemented by [`GithubClient`](crate::GithubClient) for real traffic and
/// by [`MockRepoDataSource`](crate::testing::MockRepoDataSource) in tests.
#[async_trait]
pub trait RepoDataSource: Send + Sync {
    /// List contributors for a repository.
    async fn fetch_contributors(&self, owner: &str, name: &str) -> Result<Vec<RawContributor>, Error>;

    /// Get repository metadata.
    async fn fetch_repository(&self, owner: &str, name: &str) -> Result<Repository, Error>;
}

/// Service producing leaderboards and project views from a data source.
pub struct LeaderboardService<S> {
    source: S,
}

impl<S: RepoDataSource> LeaderboardService<S> {
    /// Create a new leaderboard service over a data source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build the cross-repository leaderboard for the tracked repositories.
    ///
    /// Contributor lists are fetched concurrently; results are re-associated
    /// with their originating repository, so the flattened order follows the
    /// tracked list regardless of fetch completion order. A repository whose
    /// fetch fails contributes zero entries and does not abort the others.
    /// An empty tracked list yields an empty leaderboard.
    pub async fn build_leaderboard(&self, tracked: &[TrackedRepo]) -> Vec<AggregatedContributor> {
        let fetches = tracked.iter().map(|repo| async move {
            match self.source.fetch_contributors(&repo.owner, &repo.name).await {
                Ok(contributors) => contributors,
                Err(e) => {
                    warn!("Failed to fetch contributors for {}: {}", repo, e);
                    Vec::new()
                }
            }
        });

        let per_repo = join_all(fetches).await;
        merge_contributors(&per_repo)
    }

    /// Get a single repository's detail: metadata plus scored contributors.
    ///
    /// Returns `None` if the metadata fetch fails. A failed contributor
    /// fetch degrades to an empty list rather than suppressing the detail.
    pub async fn project_detail(&self, repo: &TrackedRepo) -> Option<ProjectDetail> {
        let repository = match self.source.fetch_repository(&repo.owner, &repo.name).await {
            Ok(repository) => repository,
            Err(e) => {
                warn!("Failed to fetch repository {}: {}", repo, e);
                return None;
            }
        };

        let contributors = match self.source.fetch_contributors(&repo.owner, &repo.name).await {
            Ok(contributors) => contributors,
            Err(e) => {
                warn!("Failed to fetch contributors for {}: {}", repo, e);
                Vec::new()
            }
        };

        Some(ProjectDetail {
            owner: repo.owner.clone(),
            name: repo.name.clone(),
            repository,
            contributors: annotate_contributors(contributors),
        })
    }

    /// Build overviews for the tracked repositories, fetched concurrently.
    ///
    /// Repositories whose metadata fetch fails are skipped; the rest keep
    /// their tracked-list order.
    pub async fn project_summaries(&self, tracked: &[TrackedRepo]) -> Vec<ProjectSummary> {
        let fetches = tracked.iter().map(|repo| async move {
            let repository = match self.source.fetch_repository(&repo.owner, &repo.name).await {
                Ok(repository) => repository,
                Err(e) => {
                    warn!("Failed to fetch repository {}: {}", repo, e);
                    return None;
                }
            };

            let contributor_count = match self.source.fetch_contributors(&repo.owner, &repo.name).await {
                Ok(contributors) => contributors.len(),
                Err(e) => {
                    warn!("Failed to fetch contributors for {}: {}", repo, e);
                    0
                }
            };

            Some(ProjectSummary {
                owner: repo.owner.clone(),
                name: repo.name.clone(),
                repository,
                contributor_count,
            })
        });

        join_all(fetches).await.into_iter().flatten().collect()
    }
}

/// Annotate a single repository's contributor list with rank, score, and
/// badge. Rank is the 1-based list position; no cross-repository merge.
#[must_use]
pub fn annotate_contributors(contributors: Vec<RawContributor>) -> Vec<ScoredContributor> {
    contributors
        .into_iter()
        .enumerate()
        .map(|(index, contributor)| ScoredContributor {
            rank: index + 1,
            score: score(contributor.contributions),
            badge: Badge::classify(contributor.contributions),
            id: contributor.id,
            login: contributor.login,
            avatar_url: contributor.avatar_url,
            contributions: contributor.contributions,
        })
        .collect()
}

/// Internal accumulator for one login across repositories
struct LoginAggregate {
    avatar_url: String,
    total_contributions: u64,
    repositories: HashSet<usize>,
}

/// Merge per-repository contributor lists into a ranked leaderboard.
///
/// Grouping is by exact `login`. Totals sum across all appearances; the
/// avatar comes from the first appearance in flatten order; only
/// repositories with at least one contribution count toward
/// `repository_count`. The sort by score descending is stable, so entries
/// with equal scores keep their first-seen order.
fn merge_contributors(per_repo: &[Vec<RawContributor>]) -> Vec<AggregatedContributor> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, LoginAggregate> = HashMap::new();

    for (repo_index, contributors) in per_repo.iter().enumerate() {
        for contributor in contributors {
            let entry = groups
                .entry(contributor.login.clone())
                .or_insert_with(|| {
                    order.push(contributor.login.clone());
                    LoginAggregate {
                        avatar_url: contributor.avatar_url.clone(),
                        total_contributions: 0,
                        repositories: HashSet::new(),
                    }
                });

            entry.total_contributions += contributor.contributions;
            if contributor.contributions > 0 {
                entry.repositories.insert(repo_index);
            }
        }
    }

    let mut entries: Vec<AggregatedContributor> = order
        .iter()
        .filter_map(|login| {
            groups.remove(login).map(|group| AggregatedContributor {
                login: login.clone(),
                avatar_url: group.avatar_url,
                total_contributions: group.total_contributions,
                repository_count: group.repositories.len(),
                score: score(group.total_contributions),
                badge: Badge::classify(group.total_contributions),
                rank: 0,
            })
        })
        .collect();

    // sort_by is stable: equal scores keep first-seen order
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contributor(id: u64, login: &str, contributions: u64) -> RawContributor {
        RawContributor {
            id,
            login: login.to_string(),
            avatar_url: format!("https://example.com/{login}.png"),
            contributions,
        }
    }

    #[test]
    fn test_merge_sums_across_repositories() {
        let per_repo = vec![
            vec![contributor(1, "alice", 5)],
            vec![contributor(9, "alice", 8)],
        ];

        let board = merge_contributors(&per_repo);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].login, "alice");
        assert_eq!(board[0].total_contributions, 13);
        assert_eq!(board[0].repository_count, 2);
        assert_eq!(board[0].score, 130);
        assert_eq!(board[0].badge, Badge::C);
        assert_eq!(board[0].rank, 1);
    }

    #[test]
    fn test_merge_keeps_first_seen_avatar() {
        let first = RawContributor {
            id: 1,
            login: "alice".to_string(),
            avatar_url: "https://example.com/first.png".to_string(),
            contributions: 2,
        };
        let second = RawContributor {
            id: 7,
            login: "alice".to_string(),
            avatar_url: "https://example.com/second.png".to_string(),
            contributions: 4,
        };

        let board = merge_contributors(&[vec![first], vec![second]]);

        assert_eq!(board[0].avatar_url, "https://example.com/first.png");
    }

    #[test]
    fn test_merge_sorts_by_score_descending() {
        let per_repo = vec![vec![
            contributor(1, "low", 3),
            contributor(2, "high", 30),
            contributor(3, "mid", 12),
        ]];

        let board = merge_contributors(&per_repo);

        let logins: Vec<&str> = board.iter().map(|e| e.login.as_str()).collect();
        assert_eq!(logins, ["high", "mid", "low"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
    }

    #[test]
    fn test_merge_breaks_ties_by_first_seen_order() {
        // "beta" and "alpha" tie on score; repo order decides.
        let per_repo = vec![
            vec![contributor(1, "beta", 7)],
            vec![contributor(2, "alpha", 7), contributor(3, "gamma", 9)],
        ];

        let board = merge_contributors(&per_repo);

        let logins: Vec<&str> = board.iter().map(|e| e.login.as_str()).collect();
        assert_eq!(logins, ["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_merge_ignores_zero_contribution_repos_in_count() {
        let per_repo = vec![
            vec![contributor(1, "alice", 0)],
            vec![contributor(2, "alice", 6)],
        ];

        let board = merge_contributors(&per_repo);

        assert_eq!(board[0].total_contributions, 6);
        assert_eq!(board[0].repository_count, 1);
    }

    #[test]
    fn test_merge_empty_input() {
        assert!(merge_contributors(&[]).is_empty());
        assert!(merge_contributors(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_annotate_assigns_positional_ranks() {
        let scored = annotate_contributors(vec![
            contributor(1, "first", 25),
            contributor(2, "second", 16),
            contributor(3, "third", 2),
        ]);

        assert_eq!(scored[0].rank, 1);
        assert_eq!(scored[0].badge, Badge::A);
        assert_eq!(scored[1].rank, 2);
        assert_eq!(scored[1].score, 160);
        assert_eq!(scored[2].rank, 3);
        assert_eq!(scored[2].badge, Badge::E);
    }
}
