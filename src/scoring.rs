//! Scoring policy: badge classification and score derivation.
//!
//! Pure functions of the contribution count. No state, no I/O.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Linear multiplier applied to contribution counts to produce a score.
pub const SCORE_MULTIPLIER: u64 = 10;

/// Contribution count above which tier A is awarded (strict).
const TIER_A_OVER: u64 = 20;
/// Contribution count above which tier B is awarded (strict).
const TIER_B_OVER: u64 = 15;
/// Contribution count above which tier C is awarded (strict).
const TIER_C_OVER: u64 = 10;
/// Contribution count above which tier D is awarded (strict).
const TIER_D_OVER: u64 = 5;

/// Badge classification of a contribution count.
///
/// Five ordered tiers, best first. The derived ordering follows declaration
/// order, so `Badge::A < Badge::E`: comparing badges compares tier quality
/// best-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Badge {
    /// More than 20 contributions
    A,
    /// 16 to 20 contributions
    B,
    /// 11 to 15 contributions
    C,
    /// 6 to 10 contributions
    D,
    /// 5 or fewer contributions, the catch-all tier
    E,
}

impl Badge {
    /// Classify a contribution count into a badge tier.
    ///
    /// Total over all `u64` values: every count maps to exactly one tier.
    /// Thresholds are strict lower bounds except tier E, the default.
    #[must_use]
    pub fn classify(contributions: u64) -> Self {
        if contributions > TIER_A_OVER {
            Self::A
        } else if contributions > TIER_B_OVER {
            Self::B
        } else if contributions > TIER_C_OVER {
            Self::C
        } else if contributions > TIER_D_OVER {
            Self::D
        } else {
            Self::E
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
            Self::D => write!(f, "D"),
            Self::E => write!(f, "E"),
        }
    }
}

/// Derive the ranking score for a contribution count.
#[must_use]
pub fn score(contributions: u64) -> u64 {
    contributions * SCORE_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        // Each threshold value and its immediate neighbors.
        assert_eq!(Badge::classify(21), Badge::A);
        assert_eq!(Badge::classify(20), Badge::B);
        assert_eq!(Badge::classify(16), Badge::B);
        assert_eq!(Badge::classify(15), Badge::C);
        assert_eq!(Badge::classify(11), Badge::C);
        assert_eq!(Badge::classify(10), Badge::D);
        assert_eq!(Badge::classify(6), Badge::D);
        assert_eq!(Badge::classify(5), Badge::E);
        assert_eq!(Badge::classify(1), Badge::E);
        assert_eq!(Badge::classify(0), Badge::E);
    }

    #[test]
    fn test_classify_is_monotonic() {
        // A larger count never yields a strictly worse tier.
        for x in 0..=100u64 {
            for y in x..=100u64 {
                assert!(
                    Badge::classify(y) <= Badge::classify(x),
                    "classify({y}) ranked below classify({x})"
                );
            }
        }
    }

    #[test]
    fn test_badge_ordering_is_best_first() {
        assert!(Badge::A < Badge::B);
        assert!(Badge::D < Badge::E);
    }

    #[test]
    fn test_badge_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Badge::A).expect("Should serialize"), "\"A\"");
        let badge: Badge = serde_json::from_str("\"E\"").expect("Should deserialize");
        assert_eq!(badge, Badge::E);
    }

    #[test]
    fn test_score_is_linear() {
        assert_eq!(score(0), 0);
        assert_eq!(score(13), 130);
        assert_eq!(score(1_000_000), 10_000_000);
    }
}
