//! Leaderboard queries
//!
//! `score` on an entry is the donor's participation XP earned inside the
//! requested period (summed from activity records), not the all-time total
//! stored on the donor row.

use chrono::{DateTime, Utc};
use common::models::{Donor, DonorStats, LeaderboardEntry};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    id: Uuid,
    email: String,
    display_name: String,
    avatar_url: Option<String>,
    donation_xp: i64,
    participation_xp: i64,
    unified_xp: i64,
    rank_title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    period_xp: i64,
    threads_created: i32,
    replies_posted: i32,
    likes_received: i32,
    thanks_received: i32,
}

/// Get the activity leaderboard for a time period
pub async fn get_leaderboard(
    pool: &PgPool,
    since: DateTime<Utc>,
    limit: i32,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT
            d.id, d.email, d.display_name, d.avatar_url,
            d.donation_xp, d.participation_xp, d.unified_xp, d.rank_title,
            d.created_at, d.updated_at,
            COALESCE(SUM(a.xp_earned), 0)::bigint AS period_xp,
            COUNT(*) FILTER (WHERE a.kind = 'create_thread')::int AS threads_created,
            COUNT(*) FILTER (WHERE a.kind = 'post_reply')::int AS replies_posted,
            COUNT(*) FILTER (WHERE a.kind = 'receive_like')::int AS likes_received,
            COUNT(*) FILTER (WHERE a.kind = 'receive_thank')::int AS thanks_received
        FROM donors d
        LEFT JOIN activity_events a ON a.donor_id = d.id AND a.occurred_at >= $1
        GROUP BY d.id
        HAVING COUNT(a.id) > 0
        ORDER BY period_xp DESC, d.unified_xp DESC
        LIMIT $2
        "#,
    )
    .bind(since)
    .bind(limit as i64)
    .fetch_all(pool)
    .await?;

    let entries = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let donor = Donor {
                id: row.id,
                email: row.email,
                display_name: row.display_name,
                avatar_url: row.avatar_url,
                donation_xp: row.donation_xp,
                participation_xp: row.participation_xp,
                unified_xp: row.unified_xp,
                rank_title: row.rank_title,
                created_at: row.created_at,
                updated_at: row.updated_at,
            };
            LeaderboardEntry {
                rank: (idx + 1) as i32,
                score: row.period_xp,
                donor,
                stats: DonorStats {
                    threads_created: row.threads_created,
                    replies_posted: row.replies_posted,
                    likes_received: row.likes_received,
                    thanks_received: row.thanks_received,
                    ..Default::default()
                },
            }
        })
        .collect();

    Ok(entries)
}

/// Get a donor's position on the period leaderboard
pub async fn get_donor_rank(
    pool: &PgPool,
    donor_id: Uuid,
    since: DateTime<Utc>,
) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"
        WITH ranked AS (
            SELECT
                d.id,
                ROW_NUMBER() OVER (
                    ORDER BY COALESCE(SUM(a.xp_earned), 0) DESC, d.unified_xp DESC
                ) AS position
            FROM donors d
            LEFT JOIN activity_events a ON a.donor_id = d.id AND a.occurred_at >= $2
            GROUP BY d.id
            HAVING COUNT(a.id) > 0
        )
        SELECT position::int FROM ranked WHERE id = $1
        "#,
    )
    .bind(donor_id)
    .bind(since)
    .fetch_optional(pool)
    .await
}
