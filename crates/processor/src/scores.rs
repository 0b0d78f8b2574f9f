//! XP scoring and donor total refresh

use common::models::{ActionKind, Donor};
use sqlx::PgPool;
use uuid::Uuid;

use crate::actions::action_base_xp;
use crate::profile::profile_completion_xp;
use crate::quality::{score_post, PostMetrics};
use crate::ranks::rank_for_xp;
use crate::streaks::streak_bonus;
use crate::unified::{donation_xp_for_cents, unified_xp};

/// Score a single action.
///
/// Post-shaped actions must carry metrics and go through the quality
/// multiplier; reactions and bonus awards score at their base value.
pub fn score_event(kind: ActionKind, metrics: Option<&PostMetrics>) -> common::Result<i64> {
    let base = action_base_xp(kind);

    match kind {
        ActionKind::CreateThread | ActionKind::PostReply => {
            let metrics = metrics.ok_or_else(|| {
                common::Error::Validation(format!(
                    "{} events require post metrics",
                    kind.as_str()
                ))
            })?;
            validate_metrics(metrics)?;
            Ok(score_post(base, metrics))
        }
        _ => Ok(base),
    }
}

fn validate_metrics(metrics: &PostMetrics) -> common::Result<()> {
    if metrics.word_count < 0 {
        return Err(common::Error::Validation(
            "word_count must be non-negative".to_string(),
        ));
    }
    if metrics.post_number_today < 1 {
        return Err(common::Error::Validation(
            "post_number_today is 1-based".to_string(),
        ));
    }
    Ok(())
}

/// Recompute a donor's XP totals and rank from stored state and write them
/// back.
///
/// Participation is the sum of recorded activity XP plus the current streak
/// and profile bonuses; donation XP is re-derived from the pledge total.
pub async fn refresh_donor(pool: &PgPool, donor_id: Uuid) -> common::Result<Donor> {
    let activity_xp = db::activity::total_xp_for_donor(pool, donor_id)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let streak_days = db::streaks::get_for_donor(pool, donor_id)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?
        .map(|s| s.consecutive_days)
        .unwrap_or(0);

    let profile = db::profiles::get_for_donor(pool, donor_id)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?
        .unwrap_or_default();

    let pledged_cents = db::pledges::total_cents_for_donor(pool, donor_id)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let participation = activity_xp + streak_bonus(streak_days) + profile_completion_xp(&profile);
    let donation = donation_xp_for_cents(pledged_cents);
    let unified = unified_xp(donation, participation);
    let rank = rank_for_xp(unified);

    db::donors::set_xp(pool, donor_id, donation, participation, unified, rank.title)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_events_score_at_base_value() {
        assert_eq!(score_event(ActionKind::ReceiveLike, None).unwrap(), 10);
        assert_eq!(score_event(ActionKind::ThreadPinned, None).unwrap(), 200);
    }

    #[test]
    fn test_post_events_require_metrics() {
        assert!(score_event(ActionKind::PostReply, None).is_err());
        assert!(score_event(ActionKind::CreateThread, None).is_err());
    }

    #[test]
    fn test_post_events_go_through_quality_multiplier() {
        let metrics = PostMetrics {
            word_count: 120,
            has_media: false,
            post_number_today: 1,
        };
        // 100 base × 1.5 length tier
        assert_eq!(
            score_event(ActionKind::CreateThread, Some(&metrics)).unwrap(),
            150
        );
    }

    #[test]
    fn test_invalid_metrics_are_rejected() {
        let negative_words = PostMetrics {
            word_count: -1,
            has_media: false,
            post_number_today: 1,
        };
        assert!(score_event(ActionKind::PostReply, Some(&negative_words)).is_err());

        let zero_ordinal = PostMetrics {
            word_count: 10,
            has_media: false,
            post_number_today: 0,
        };
        assert!(score_event(ActionKind::PostReply, Some(&zero_ordinal)).is_err());
    }
}
