//! Donor queries

use chrono::{DateTime, Utc};
use common::models::{Donor, DonorStats};
use sqlx::PgPool;
use uuid::Uuid;

/// Get or create a donor by email
pub async fn upsert(
    pool: &PgPool,
    email: &str,
    display_name: &str,
    avatar_url: Option<&str>,
) -> Result<Donor, sqlx::Error> {
    sqlx::query_as::<_, Donor>(
        r#"
        INSERT INTO donors (id, email, display_name, avatar_url)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO UPDATE
        SET display_name = EXCLUDED.display_name,
            avatar_url = COALESCE(EXCLUDED.avatar_url, donors.avatar_url),
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(email)
    .bind(display_name)
    .bind(avatar_url)
    .fetch_one(pool)
    .await
}

/// Get donor by email
pub async fn get_by_email(pool: &PgPool, email: &str) -> Result<Option<Donor>, sqlx::Error> {
    sqlx::query_as::<_, Donor>("SELECT * FROM donors WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get donor by ID
pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Donor>, sqlx::Error> {
    sqlx::query_as::<_, Donor>("SELECT * FROM donors WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All donor IDs, for full recalculation sweeps
pub async fn list_ids(pool: &PgPool) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT id FROM donors ORDER BY created_at")
        .fetch_all(pool)
        .await
}

/// Write a donor's recomputed XP totals and rank
pub async fn set_xp(
    pool: &PgPool,
    donor_id: Uuid,
    donation_xp: i64,
    participation_xp: i64,
    unified_xp: i64,
    rank_title: &str,
) -> Result<Donor, sqlx::Error> {
    sqlx::query_as::<_, Donor>(
        r#"
        UPDATE donors
        SET donation_xp = $2,
            participation_xp = $3,
            unified_xp = $4,
            rank_title = $5,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(donor_id)
    .bind(donation_xp)
    .bind(participation_xp)
    .bind(unified_xp)
    .bind(rank_title)
    .fetch_one(pool)
    .await
}

/// Zero out every donor's XP ahead of a full recalculation
pub async fn reset_all_xp(pool: &PgPool, base_rank: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE donors SET donation_xp = 0, participation_xp = 0, unified_xp = 0, rank_title = $1",
    )
    .bind(base_rank)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

#[derive(sqlx::FromRow)]
struct ActivityCounts {
    threads_created: i32,
    replies_posted: i32,
    likes_received: i32,
    thanks_received: i32,
}

/// Period stats for a donor's profile page
pub async fn get_stats(
    pool: &PgPool,
    donor_id: Uuid,
    since: DateTime<Utc>,
) -> Result<DonorStats, sqlx::Error> {
    let counts = sqlx::query_as::<_, ActivityCounts>(
        r#"
        SELECT
            COUNT(*) FILTER (WHERE kind = 'create_thread')::int AS threads_created,
            COUNT(*) FILTER (WHERE kind = 'post_reply')::int AS replies_posted,
            COUNT(*) FILTER (WHERE kind = 'receive_like')::int AS likes_received,
            COUNT(*) FILTER (WHERE kind = 'receive_thank')::int AS thanks_received
        FROM activity_events
        WHERE donor_id = $1 AND occurred_at >= $2
        "#,
    )
    .bind(donor_id)
    .bind(since)
    .fetch_one(pool)
    .await?;

    let streak_days = crate::streaks::get_for_donor(pool, donor_id)
        .await?
        .map(|s| s.consecutive_days)
        .unwrap_or(0);

    let total_pledged_cents = crate::pledges::total_cents_for_donor(pool, donor_id).await?;

    Ok(DonorStats {
        threads_created: counts.threads_created,
        replies_posted: counts.replies_posted,
        likes_received: counts.likes_received,
        thanks_received: counts.thanks_received,
        streak_days,
        total_pledged_cents,
    })
}
