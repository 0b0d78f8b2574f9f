//! XP recalculation routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecalcResponse {
    pub status: String,
    pub total_events: usize,
    pub skipped_events: usize,
    pub total_xp_awarded: i64,
    pub donors_with_activity: usize,
    pub donors_refreshed: usize,
}

pub async fn trigger(State(state): State<Arc<AppState>>) -> ApiResult<Json<RecalcResponse>> {
    info!("Recalculation triggered via API");

    let stats = processor::recalculate_all_xp(&state.pool)
        .await
        .map_err(|e| ApiError::Internal(format!("Recalculation failed: {}", e)))?;

    Ok(Json(RecalcResponse {
        status: "complete".to_string(),
        total_events: stats.total_events,
        skipped_events: stats.skipped_events,
        total_xp_awarded: stats.total_xp_awarded,
        donors_with_activity: stats.donors_with_activity,
        donors_refreshed: stats.donors_refreshed,
    }))
}
