//! Activity ingest routes

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::error::ApiResult;
use crate::state::AppState;
use common::models::ActivityRecord;
use processor::ActivityEvent;

/// Record one XP-qualifying forum action
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ActivityEvent>,
) -> ApiResult<(StatusCode, Json<ActivityRecord>)> {
    let record = state.event_handler.handle(event).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
