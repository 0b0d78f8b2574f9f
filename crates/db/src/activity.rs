//! Activity event queries

use chrono::{DateTime, Utc};
use common::models::{ActionKind, ActivityRecord};
use sqlx::PgPool;
use uuid::Uuid;

/// Record a scored action
pub async fn insert(
    pool: &PgPool,
    donor_id: Uuid,
    kind: ActionKind,
    word_count: Option<i32>,
    has_media: Option<bool>,
    post_number_today: Option<i32>,
    xp_earned: i64,
    occurred_at: DateTime<Utc>,
) -> Result<ActivityRecord, sqlx::Error> {
    sqlx::query_as::<_, ActivityRecord>(
        r#"
        INSERT INTO activity_events
            (id, donor_id, kind, word_count, has_media, post_number_today, xp_earned, occurred_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(donor_id)
    .bind(kind)
    .bind(word_count)
    .bind(has_media)
    .bind(post_number_today)
    .bind(xp_earned)
    .bind(occurred_at)
    .fetch_one(pool)
    .await
}

/// Every stored event, oldest first, for recalculation replays
pub async fn list_all(pool: &PgPool) -> Result<Vec<ActivityRecord>, sqlx::Error> {
    sqlx::query_as::<_, ActivityRecord>("SELECT * FROM activity_events ORDER BY occurred_at ASC")
        .fetch_all(pool)
        .await
}

/// A donor's most recent events
pub async fn list_recent_for_donor(
    pool: &PgPool,
    donor_id: Uuid,
    limit: i64,
) -> Result<Vec<ActivityRecord>, sqlx::Error> {
    sqlx::query_as::<_, ActivityRecord>(
        "SELECT * FROM activity_events WHERE donor_id = $1 ORDER BY occurred_at DESC LIMIT $2",
    )
    .bind(donor_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Sum of all recorded activity XP for a donor
pub async fn total_xp_for_donor(pool: &PgPool, donor_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(xp_earned), 0)::bigint FROM activity_events WHERE donor_id = $1",
    )
    .bind(donor_id)
    .fetch_one(pool)
    .await
}

/// Overwrite a record's stored XP after rescoring
pub async fn set_xp_earned(pool: &PgPool, id: Uuid, xp_earned: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE activity_events SET xp_earned = $2 WHERE id = $1")
        .bind(id)
        .bind(xp_earned)
        .execute(pool)
        .await?;
    Ok(())
}
