//! Profile completion bonuses

use common::models::ProfileCompletionState;

const AVATAR_XP: i64 = 50;
const BIO_XP: i64 = 50;
const SIGNATURE_XP: i64 = 25;
const SOCIAL_LINK_XP: i64 = 25;
const FAVORITE_SERIES_XP: i64 = 25;
const LOCATION_XP: i64 = 25;

const POPULAR_PROFILE_VIEWS: i32 = 100;
const POPULAR_PROFILE_XP: i64 = 50;

const COMPLETE_PROFILE_XP: i64 = 200;

/// True when every boolean field is filled and at least one social link is
/// set. Gates the flat completeness bonus.
pub fn is_complete(state: &ProfileCompletionState) -> bool {
    state.has_avatar
        && state.has_bio
        && state.has_signature
        && state.has_favorite_series
        && state.has_location
        && state.social_links > 0
}

/// Total XP for a donor's profile state: one bonus per filled field, one per
/// social link, a threshold bonus for popular profiles, and the flat
/// completeness bonus on top for fully filled profiles.
pub fn profile_completion_xp(state: &ProfileCompletionState) -> i64 {
    debug_assert!(state.social_links >= 0, "social_links must be non-negative");
    debug_assert!(state.profile_views >= 0, "profile_views must be non-negative");

    let mut xp = 0;

    if state.has_avatar {
        xp += AVATAR_XP;
    }
    if state.has_bio {
        xp += BIO_XP;
    }
    if state.has_signature {
        xp += SIGNATURE_XP;
    }
    if state.has_favorite_series {
        xp += FAVORITE_SERIES_XP;
    }
    if state.has_location {
        xp += LOCATION_XP;
    }

    xp += state.social_links as i64 * SOCIAL_LINK_XP;

    if state.profile_views >= POPULAR_PROFILE_VIEWS {
        xp += POPULAR_PROFILE_XP;
    }

    // Additive on top of the per-field sum, not a replacement for it
    if is_complete(state) {
        xp += COMPLETE_PROFILE_XP;
    }

    xp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> ProfileCompletionState {
        ProfileCompletionState {
            has_avatar: true,
            has_bio: true,
            has_signature: true,
            social_links: 2,
            has_favorite_series: true,
            has_location: true,
            profile_views: 250,
        }
    }

    #[test]
    fn test_empty_profile_earns_nothing() {
        assert_eq!(profile_completion_xp(&ProfileCompletionState::default()), 0);
    }

    #[test]
    fn test_each_social_link_counts_individually() {
        let one_link = ProfileCompletionState {
            social_links: 1,
            ..Default::default()
        };
        let three_links = ProfileCompletionState {
            social_links: 3,
            ..Default::default()
        };
        assert_eq!(
            profile_completion_xp(&three_links) - profile_completion_xp(&one_link),
            2 * SOCIAL_LINK_XP
        );
    }

    #[test]
    fn test_view_threshold_bonus() {
        let below = ProfileCompletionState {
            profile_views: 99,
            ..Default::default()
        };
        let at = ProfileCompletionState {
            profile_views: 100,
            ..Default::default()
        };
        assert_eq!(profile_completion_xp(&below), 0);
        assert_eq!(profile_completion_xp(&at), POPULAR_PROFILE_XP);
    }

    #[test]
    fn test_all_booleans_but_no_social_links_is_not_complete() {
        let state = ProfileCompletionState {
            social_links: 0,
            ..full_profile()
        };
        assert!(!is_complete(&state));

        // Adding a single link (all booleans already true) flips the gate
        let with_link = ProfileCompletionState {
            social_links: 1,
            ..state.clone()
        };
        assert!(is_complete(&with_link));
        assert_eq!(
            profile_completion_xp(&with_link) - profile_completion_xp(&state),
            SOCIAL_LINK_XP + COMPLETE_PROFILE_XP
        );
    }

    #[test]
    fn test_complete_profile_earns_per_field_sum_plus_bonus() {
        let state = full_profile();
        let per_field = AVATAR_XP
            + BIO_XP
            + SIGNATURE_XP
            + 2 * SOCIAL_LINK_XP
            + FAVORITE_SERIES_XP
            + LOCATION_XP
            + POPULAR_PROFILE_XP;
        assert_eq!(profile_completion_xp(&state), per_field + COMPLETE_PROFILE_XP);
    }
}
