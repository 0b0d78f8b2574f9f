//! Leaderboard routes

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiResult, DbResultExt};
use crate::state::AppState;
use common::models::LeaderboardEntry;

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    /// Time period: "week", "month", "all"
    #[serde(default = "default_period")]
    period: String,
    /// Defaults to the configured leaderboard size
    limit: Option<i32>,
}

fn default_period() -> String {
    "month".to_string()
}

fn period_to_since(period: &str) -> chrono::DateTime<Utc> {
    match period {
        "week" => Utc::now() - Duration::days(7),
        "month" => Utc::now() - Duration::days(30),
        "all" => Utc::now() - Duration::days(365 * 10),
        _ => Utc::now() - Duration::days(30),
    }
}

pub async fn global(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntry>>> {
    let since = period_to_since(&query.period);
    let limit = query.limit.unwrap_or(state.config.leaderboard_limit);

    let leaderboard = db::leaderboard::get_leaderboard(&state.pool, since, limit)
        .await
        .db_err()?;

    Ok(Json(leaderboard))
}
