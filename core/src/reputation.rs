//! Reputation scoring
//!
//! Score = min(1000, SOL received × 10 + posts × 2). The tip term is taken
//! from lamports with integer division, so fractional points are dropped.

use crate::amount::{Lamports, LAMPORTS_PER_SOL};
use serde::{Deserialize, Serialize};

/// Score ceiling
pub const MAX_REPUTATION: u32 = 1000;

/// Points per whole SOL received
pub const POINTS_PER_SOL_RECEIVED: u64 = 10;

/// Points per authored post
pub const POINTS_PER_POST: u64 = 2;

/// Compute the reputation score from a user's counters
pub fn reputation(tips_received: Lamports, post_count: u64) -> u32 {
    let tip_points = (tips_received as u128 * POINTS_PER_SOL_RECEIVED as u128)
        / LAMPORTS_PER_SOL as u128;
    let post_points = post_count as u128 * POINTS_PER_POST as u128;

    (tip_points + post_points).min(MAX_REPUTATION as u128) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReputationLevel {
    Legend,     // 500+
    Expert,     // 200-499
    RisingStar, // 100-199
    Active,     // 50-99
    Newcomer,   // < 50
}

impl ReputationLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 500 => Self::Legend,
            s if s >= 200 => Self::Expert,
            s if s >= 100 => Self::RisingStar,
            s if s >= 50 => Self::Active,
            _ => Self::Newcomer,
        }
    }
}

impl std::fmt::Display for ReputationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legend => write!(f, "Legend"),
            Self::Expert => write!(f, "Expert"),
            Self::RisingStar => write!(f, "Rising Star"),
            Self::Active => write!(f, "Active"),
            Self::Newcomer => write!(f, "Newcomer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_points() {
        assert_eq!(reputation(0, 0), 0);
        assert_eq!(reputation(0, 1), 2);
        assert_eq!(reputation(0, 10), 20);
    }

    #[test]
    fn test_tip_points_truncate() {
        // 0.05 SOL -> 0.5 points -> 0
        assert_eq!(reputation(50_000_000, 1), 2);
        // 0.1 SOL -> exactly 1 point
        assert_eq!(reputation(100_000_000, 1), 3);
        // 0.19 SOL -> 1.9 points -> 1
        assert_eq!(reputation(190_000_000, 0), 1);
    }

    #[test]
    fn test_reputation_capped() {
        assert_eq!(reputation(100 * LAMPORTS_PER_SOL, 0), 1000);
        assert_eq!(reputation(0, 501), 1000);
        assert_eq!(reputation(u64::MAX, u64::MAX), MAX_REPUTATION);
    }

    #[test]
    fn test_reputation_levels() {
        assert_eq!(ReputationLevel::from_score(0), ReputationLevel::Newcomer);
        assert_eq!(ReputationLevel::from_score(49), ReputationLevel::Newcomer);
        assert_eq!(ReputationLevel::from_score(50), ReputationLevel::Active);
        assert_eq!(ReputationLevel::from_score(100), ReputationLevel::RisingStar);
        assert_eq!(ReputationLevel::from_score(200), ReputationLevel::Expert);
        assert_eq!(ReputationLevel::from_score(1000), ReputationLevel::Legend);
        assert_eq!(ReputationLevel::RisingStar.to_string(), "Rising Star");
    }
}
