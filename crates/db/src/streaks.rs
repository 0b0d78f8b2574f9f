//! Streak tracking queries

use chrono::NaiveDate;
use common::models::StreakState;
use sqlx::PgPool;
use uuid::Uuid;

/// Next consecutive-day count after activity on `active_on`.
///
/// Same-day activity leaves the streak alone, the next calendar day extends
/// it, a gap resets it to 1. Backdated events older than the last active
/// day never rewind an existing streak.
pub fn advance(current: Option<(i32, NaiveDate)>, active_on: NaiveDate) -> i32 {
    match current {
        None => 1,
        Some((days, last_active_on)) => {
            if active_on <= last_active_on {
                days
            } else if active_on == last_active_on + chrono::Days::new(1) {
                days + 1
            } else {
                1
            }
        }
    }
}

/// Get a donor's streak state
pub async fn get_for_donor(
    pool: &PgPool,
    donor_id: Uuid,
) -> Result<Option<StreakState>, sqlx::Error> {
    sqlx::query_as::<_, StreakState>(
        "SELECT donor_id, consecutive_days, last_active_on FROM streaks WHERE donor_id = $1",
    )
    .bind(donor_id)
    .fetch_optional(pool)
    .await
}

/// Register activity on a calendar day and update the streak accordingly
pub async fn touch(
    pool: &PgPool,
    donor_id: Uuid,
    active_on: NaiveDate,
) -> Result<StreakState, sqlx::Error> {
    let current = get_for_donor(pool, donor_id)
        .await?
        .map(|s| (s.consecutive_days, s.last_active_on));

    let days = advance(current, active_on);
    let last_active_on = match current {
        Some((_, last)) if last > active_on => last,
        _ => active_on,
    };

    sqlx::query_as::<_, StreakState>(
        r#"
        INSERT INTO streaks (donor_id, consecutive_days, last_active_on)
        VALUES ($1, $2, $3)
        ON CONFLICT (donor_id) DO UPDATE
        SET consecutive_days = EXCLUDED.consecutive_days,
            last_active_on = EXCLUDED.last_active_on
        RETURNING donor_id, consecutive_days, last_active_on
        "#,
    )
    .bind(donor_id)
    .bind(days)
    .bind(last_active_on)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity_starts_streak_at_one() {
        assert_eq!(advance(None, day(5)), 1);
    }

    #[test]
    fn test_same_day_activity_does_not_double_count() {
        assert_eq!(advance(Some((4, day(5))), day(5)), 4);
    }

    #[test]
    fn test_next_day_extends() {
        assert_eq!(advance(Some((4, day(5))), day(6)), 5);
    }

    #[test]
    fn test_gap_resets() {
        assert_eq!(advance(Some((40, day(5))), day(8)), 1);
    }

    #[test]
    fn test_backdated_event_does_not_rewind() {
        assert_eq!(advance(Some((4, day(5))), day(2)), 4);
    }
}
