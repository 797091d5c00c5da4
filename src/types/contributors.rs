//! Contributor data models.

use serde::{Deserialize, Serialize};

use crate::scoring::Badge;

/// One contributor record from a single repository's contributor list,
/// as returned by `GET /repos/{owner}/{name}/contributors`.
///
/// `login` is the cross-repository join key; `id` is only unique within a
/// repository's list. Records are produced fresh on every fetch and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContributor {
    /// Opaque stable identifier
    pub id: u64,
    /// Username, the cross-repository identity
    pub login: String,
    /// Avatar image URL, display-only
    pub avatar_url: String,
    /// Contributions attributed within this single repository
    #[serde(default)]
    pub contributions: u64,
}

/// A contributor annotated with single-repository score, badge, and list
/// position. Consumed by the project detail view; no cross-repository merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredContributor {
    /// Opaque stable identifier
    pub id: u64,
    /// Username
    pub login: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Contributions within this repository
    pub contributions: u64,
    /// 1-based position in the repository's contributor list
    pub rank: usize,
    /// Derived score (`contributions * 10`)
    pub score: u64,
    /// Badge classification of the contribution count
    pub badge: Badge,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_contributor_deserialize() {
        // Field names match the GitHub payload directly.
        let json = r#"{
            "id": 583231,
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "contributions": 32
        }"#;

        let contributor: RawContributor = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(contributor.login, "octocat");
        assert_eq!(contributor.contributions, 32);
    }

    #[test]
    fn test_raw_contributor_ignores_extra_fields() {
        // Real payloads carry many more fields than the model keeps.
        let json = r#"{
            "id": 1,
            "login": "octocat",
            "avatar_url": "https://example.com/a.png",
            "contributions": 5,
            "type": "User",
            "site_admin": false,
            "url": "https://api.github.com/users/octocat"
        }"#;

        let contributor: RawContributor = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(contributor.id, 1);
    }

    #[test]
    fn test_raw_contributor_rejects_negative_contributions() {
        // Counts are unsigned; a negative value is a malformed payload.
        let json = r#"{
            "id": 1,
            "login": "octocat",
            "avatar_url": "https://example.com/a.png",
            "contributions": -3
        }"#;

        assert!(serde_json::from_str::<RawContributor>(json).is_err());
    }

    #[test]
    fn test_scored_contributor_serializes_camel_case() {
        let scored = ScoredContributor {
            id: 1,
            login: "octocat".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            contributions: 12,
            rank: 1,
            score: 120,
            badge: Badge::C,
        };

        let json = serde_json::to_value(&scored).expect("Should serialize");
        assert_eq!(json["avatarUrl"], "https://example.com/a.png");
        assert_eq!(json["score"], 120);
        assert_eq!(json["badge"], "C");
    }
}
