//! Pledge queries

use chrono::{DateTime, Utc};
use common::models::Pledge;
use sqlx::PgPool;
use uuid::Uuid;

/// Record a pledge
pub async fn insert(
    pool: &PgPool,
    donor_id: Uuid,
    campaign: Option<&str>,
    amount_cents: i64,
    pledged_at: DateTime<Utc>,
) -> Result<Pledge, sqlx::Error> {
    sqlx::query_as::<_, Pledge>(
        r#"
        INSERT INTO pledges (id, donor_id, campaign, amount_cents, pledged_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(donor_id)
    .bind(campaign)
    .bind(amount_cents)
    .bind(pledged_at)
    .fetch_one(pool)
    .await
}

/// A donor's pledges, newest first
pub async fn list_for_donor(pool: &PgPool, donor_id: Uuid) -> Result<Vec<Pledge>, sqlx::Error> {
    sqlx::query_as::<_, Pledge>(
        "SELECT * FROM pledges WHERE donor_id = $1 ORDER BY pledged_at DESC",
    )
    .bind(donor_id)
    .fetch_all(pool)
    .await
}

/// Total pledged by a donor across all campaigns
pub async fn total_cents_for_donor(pool: &PgPool, donor_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT COALESCE(SUM(amount_cents), 0)::bigint FROM pledges WHERE donor_id = $1",
    )
    .bind(donor_id)
    .fetch_one(pool)
    .await
}
