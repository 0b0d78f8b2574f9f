//! Donor routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ApiResult, DbResultExt, OptionExt};
use crate::state::AppState;
use common::models::{ActivityRecord, Donor, DonorStats, ProfileCompletionState};
use processor::ranks::{rank_for_xp, RankTier, RANKS};
use processor::{profile, streaks};

#[derive(Serialize)]
pub struct XpBreakdown {
    pub donation_xp: i64,
    pub participation_xp: i64,
    pub unified_xp: i64,
    pub activity_xp: i64,
    pub streak_bonus: i64,
    pub profile_xp: i64,
}

#[derive(Serialize)]
pub struct DonorProfile {
    pub donor: Donor,
    pub stats: DonorStats,
    pub breakdown: XpBreakdown,
    pub rank: &'static RankTier,
    pub next_rank: Option<&'static RankTier>,
    pub leaderboard_position: Option<i32>,
    pub recent_activity: Vec<ActivityRecord>,
}

#[derive(Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_period")]
    pub period: String,
}

fn default_period() -> String {
    "all".to_string()
}

fn period_to_since(period: &str) -> chrono::DateTime<Utc> {
    match period {
        "week" => Utc::now() - Duration::days(7),
        "month" => Utc::now() - Duration::days(30),
        _ => Utc::now() - Duration::days(365 * 10),
    }
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> ApiResult<Json<Donor>> {
    let donor = db::donors::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("Donor '{}' not found", email))?;

    Ok(Json(donor))
}

pub async fn stats(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<DonorProfile>> {
    let donor = db::donors::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("Donor '{}' not found", email))?;

    let since = period_to_since(&query.period);
    let stats = db::donors::get_stats(&state.pool, donor.id, since)
        .await
        .db_err()?;

    let leaderboard_position = db::leaderboard::get_donor_rank(&state.pool, donor.id, since)
        .await
        .db_err()?;

    let activity_xp = db::activity::total_xp_for_donor(&state.pool, donor.id)
        .await
        .db_err()?;
    let profile_state = db::profiles::get_for_donor(&state.pool, donor.id)
        .await
        .db_err()?
        .unwrap_or_default();

    let streak_bonus = streaks::streak_bonus(stats.streak_days);
    let profile_xp = profile::profile_completion_xp(&profile_state);

    let recent_activity = db::activity::list_recent_for_donor(&state.pool, donor.id, 10)
        .await
        .db_err()?;

    let rank = rank_for_xp(donor.unified_xp);
    let next_rank = RANKS.iter().find(|tier| tier.min_xp > donor.unified_xp);

    let breakdown = XpBreakdown {
        donation_xp: donor.donation_xp,
        participation_xp: donor.participation_xp,
        unified_xp: donor.unified_xp,
        activity_xp,
        streak_bonus,
        profile_xp,
    };

    Ok(Json(DonorProfile {
        donor,
        stats,
        breakdown,
        rank,
        next_rank,
        leaderboard_position,
        recent_activity,
    }))
}

#[derive(Serialize)]
pub struct ProfileUpdateResponse {
    pub donor: Donor,
    pub profile: ProfileCompletionState,
}

/// Replace a donor's profile completion snapshot and refresh their totals
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Json(profile_state): Json<ProfileCompletionState>,
) -> ApiResult<Json<ProfileUpdateResponse>> {
    if profile_state.social_links < 0 {
        return Err(ApiError::BadRequest(
            "social_links must be non-negative".to_string(),
        ));
    }
    if profile_state.profile_views < 0 {
        return Err(ApiError::BadRequest(
            "profile_views must be non-negative".to_string(),
        ));
    }

    let donor = db::donors::get_by_email(&state.pool, &email)
        .await
        .db_err()?
        .not_found(format!("Donor '{}' not found", email))?;

    let profile = db::profiles::upsert(&state.pool, donor.id, &profile_state)
        .await
        .db_err()?;

    let donor = processor::refresh_donor(&state.pool, donor.id).await?;

    Ok(Json(ProfileUpdateResponse { donor, profile }))
}
