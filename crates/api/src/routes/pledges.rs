//! Pledge routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{ApiError, ApiResult, DbResultExt};
use crate::state::AppState;
use common::models::{Donor, Pledge};

#[derive(Deserialize)]
pub struct PledgeRequest {
    pub display_name: Option<String>,
    pub campaign: Option<String>,
    pub amount_cents: i64,
    /// Defaults to now when omitted
    pub pledged_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct PledgeResponse {
    pub pledge: Pledge,
    pub donor: Donor,
}

/// Record a pledge and award donation XP
pub async fn create(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
    Json(request): Json<PledgeRequest>,
) -> ApiResult<(StatusCode, Json<PledgeResponse>)> {
    if request.amount_cents <= 0 {
        return Err(ApiError::BadRequest(
            "amount_cents must be positive".to_string(),
        ));
    }

    let display_name = request
        .display_name
        .clone()
        .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());

    let donor = db::donors::upsert(&state.pool, &email, &display_name, None)
        .await
        .db_err()?;

    let pledge = db::pledges::insert(
        &state.pool,
        donor.id,
        request.campaign.as_deref(),
        request.amount_cents,
        request.pledged_at.unwrap_or_else(Utc::now),
    )
    .await
    .db_err()?;

    let donor = processor::refresh_donor(&state.pool, donor.id).await?;

    info!(
        "Recorded {} cent pledge from {} (donation XP now {})",
        pledge.amount_cents, donor.email, donor.donation_xp
    );

    Ok((StatusCode::CREATED, Json(PledgeResponse { pledge, donor })))
}
