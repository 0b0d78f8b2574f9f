//! Profile completion queries

use common::models::ProfileCompletionState;
use sqlx::PgPool;
use uuid::Uuid;

/// Get a donor's profile completion snapshot
pub async fn get_for_donor(
    pool: &PgPool,
    donor_id: Uuid,
) -> Result<Option<ProfileCompletionState>, sqlx::Error> {
    sqlx::query_as::<_, ProfileCompletionState>(
        r#"
        SELECT has_avatar, has_bio, has_signature, social_links,
               has_favorite_series, has_location, profile_views
        FROM profiles
        WHERE donor_id = $1
        "#,
    )
    .bind(donor_id)
    .fetch_optional(pool)
    .await
}

/// Replace a donor's profile completion snapshot
pub async fn upsert(
    pool: &PgPool,
    donor_id: Uuid,
    state: &ProfileCompletionState,
) -> Result<ProfileCompletionState, sqlx::Error> {
    sqlx::query_as::<_, ProfileCompletionState>(
        r#"
        INSERT INTO profiles
            (donor_id, has_avatar, has_bio, has_signature, social_links,
             has_favorite_series, has_location, profile_views)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (donor_id) DO UPDATE
        SET has_avatar = EXCLUDED.has_avatar,
            has_bio = EXCLUDED.has_bio,
            has_signature = EXCLUDED.has_signature,
            social_links = EXCLUDED.social_links,
            has_favorite_series = EXCLUDED.has_favorite_series,
            has_location = EXCLUDED.has_location,
            profile_views = EXCLUDED.profile_views
        RETURNING has_avatar, has_bio, has_signature, social_links,
                  has_favorite_series, has_location, profile_views
        "#,
    )
    .bind(donor_id)
    .bind(state.has_avatar)
    .bind(state.has_bio)
    .bind(state.has_signature)
    .bind(state.social_links)
    .bind(state.has_favorite_series)
    .bind(state.has_location)
    .bind(state.profile_views)
    .fetch_one(pool)
    .await
}
