//! Data models for tracked repositories, contributors, and the leaderboard.

pub mod contributors;
pub mod leaderboard;
pub mod repos;

pub use contributors::{RawContributor, ScoredContributor};
pub use leaderboard::{AggregatedContributor, ProjectDetail, ProjectSummary};
pub use repos::{Repository, TrackedRepo};
