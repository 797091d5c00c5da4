//! Leaderboard and project-view data models.

use serde::{Deserialize, Serialize};

use crate::scoring::Badge;
use crate::types::{Repository, ScoredContributor};

/// One entry in the cross-repository leaderboard.
///
/// Many per-repository contributor records collapse onto one entry by
/// `login`. The whole leaderboard is recomputed on every fetch cycle; it is
/// never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedContributor {
    /// Username, unique within the leaderboard
    pub login: String,
    /// Avatar URL from the first-seen occurrence
    pub avatar_url: String,
    /// Sum of contributions across all tracked repositories
    pub total_contributions: u64,
    /// Distinct tracked repositories with at least one contribution
    pub repository_count: usize,
    /// Derived score (`total_contributions * 10`)
    pub score: u64,
    /// Badge classification of the total
    pub badge: Badge,
    /// 1-based position after sorting by score descending
    pub rank: usize,
}

/// Per-repository overview for the projects listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Repository metadata
    pub repository: Repository,
    /// Number of contributors on record
    pub contributor_count: usize,
}

/// Single-repository detail: metadata plus its scored contributor list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Repository metadata
    pub repository: Repository,
    /// Contributors in list order, with score and badge attached
    pub contributors: Vec<ScoredContributor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregated_contributor_serializes_camel_case() {
        let entry = AggregatedContributor {
            login: "octocat".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            total_contributions: 13,
            repository_count: 2,
            score: 130,
            badge: Badge::C,
            rank: 1,
        };

        let json = serde_json::to_value(&entry).expect("Should serialize");
        assert_eq!(json["totalContributions"], 13);
        assert_eq!(json["repositoryCount"], 2);
        assert_eq!(json["badge"], "C");
        assert_eq!(json["rank"], 1);
    }

    #[test]
    fn test_aggregated_contributor_round_trip() {
        let json = r#"{
            "login": "octocat",
            "avatarUrl": "https://example.com/a.png",
            "totalContributions": 25,
            "repositoryCount": 3,
            "score": 250,
            "badge": "A",
            "rank": 1
        }"#;

        let entry: AggregatedContributor = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(entry.total_contributions, 25);
        assert_eq!(entry.badge, Badge::A);
    }
}
