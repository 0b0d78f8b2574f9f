//! Rank tier routes

use axum::Json;

use processor::ranks::{RankTier, RANKS};

pub async fn list() -> Json<&'static [RankTier]> {
    Json(&RANKS)
}
