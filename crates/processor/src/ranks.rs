//! Rank tiers
//!
//! Named ranks thresholded over unified XP, from fresh recruit up to
//! admiral of the fan fleet.

use serde::Serialize;

/// A named rank and the unified XP needed to hold it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankTier {
    pub title: &'static str,
    pub min_xp: i64,
}

/// Ordered lowest to highest threshold
pub static RANKS: [RankTier; 6] = [
    RankTier {
        title: "Recruit",
        min_xp: 0,
    },
    RankTier {
        title: "Ensign",
        min_xp: 1_000,
    },
    RankTier {
        title: "Lieutenant",
        min_xp: 5_000,
    },
    RankTier {
        title: "Commander",
        min_xp: 20_000,
    },
    RankTier {
        title: "Captain",
        min_xp: 50_000,
    },
    RankTier {
        title: "Admiral",
        min_xp: 150_000,
    },
];

/// The highest tier whose threshold the score meets
pub fn rank_for_xp(unified_xp: i64) -> &'static RankTier {
    debug_assert!(unified_xp >= 0, "unified_xp must be non-negative");

    RANKS
        .iter()
        .rev()
        .find(|tier| unified_xp >= tier.min_xp)
        .unwrap_or(&RANKS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_xp_is_recruit() {
        assert_eq!(rank_for_xp(0).title, "Recruit");
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(rank_for_xp(999).title, "Recruit");
        assert_eq!(rank_for_xp(1_000).title, "Ensign");
        assert_eq!(rank_for_xp(4_999).title, "Ensign");
        assert_eq!(rank_for_xp(5_000).title, "Lieutenant");
        assert_eq!(rank_for_xp(150_000).title, "Admiral");
    }

    #[test]
    fn test_ranks_are_strictly_ascending() {
        for pair in RANKS.windows(2) {
            assert!(pair[0].min_xp < pair[1].min_xp);
        }
    }
}
