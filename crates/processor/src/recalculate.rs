//! Full XP recalculation
//!
//! Replays every stored activity record through the current scoring rules,
//! then refreshes every donor's totals. Run after a rule change or a data
//! import.

use sqlx::PgPool;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::quality::PostMetrics;
use crate::ranks::RANKS;
use crate::scores::{refresh_donor, score_event};

/// Recalculate all donor XP from scratch
pub async fn recalculate_all_xp(pool: &PgPool) -> Result<RecalculationStats, common::Error> {
    info!("Starting XP recalculation for all donors");

    db::donors::reset_all_xp(pool, RANKS[0].title)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    let records = db::activity::list_all(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;
    info!("Fetched {} activity records", records.len());

    let mut total_xp_awarded = 0i64;
    let mut skipped = 0usize;
    let mut donors_with_activity = HashSet::new();

    for record in &records {
        let metrics = match (record.word_count, record.has_media, record.post_number_today) {
            (Some(word_count), Some(has_media), Some(post_number_today)) => Some(PostMetrics {
                word_count,
                has_media,
                post_number_today,
            }),
            _ => None,
        };

        let xp = match score_event(record.kind, metrics.as_ref()) {
            Ok(xp) => xp,
            Err(e) => {
                warn!("Skipping activity record {}: {}", record.id, e);
                skipped += 1;
                continue;
            }
        };

        if xp != record.xp_earned {
            db::activity::set_xp_earned(pool, record.id, xp)
                .await
                .map_err(|e| common::Error::Database(e.to_string()))?;
        }

        total_xp_awarded += xp;
        donors_with_activity.insert(record.donor_id);
    }

    // Refresh every donor, including pledge-only donors with no activity
    let donor_ids = db::donors::list_ids(pool)
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

    for donor_id in &donor_ids {
        refresh_donor(pool, *donor_id).await?;
    }

    info!(
        "Recalculation complete: {} events replayed ({} skipped), {} activity XP, {} donors refreshed",
        records.len(),
        skipped,
        total_xp_awarded,
        donor_ids.len()
    );

    Ok(RecalculationStats {
        total_events: records.len(),
        skipped_events: skipped,
        total_xp_awarded,
        donors_with_activity: donors_with_activity.len(),
        donors_refreshed: donor_ids.len(),
    })
}

#[derive(Debug)]
pub struct RecalculationStats {
    pub total_events: usize,
    pub skipped_events: usize,
    pub total_xp_awarded: i64,
    pub donors_with_activity: usize,
    pub donors_refreshed: usize,
}
