//! Activity event handler

use chrono::{DateTime, Utc};
use common::models::{ActionKind, ActivityRecord};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::quality::PostMetrics;
use crate::scores::{refresh_donor, score_event};

/// An XP-qualifying event reported by the application layer.
///
/// Whether a bonus event qualifies (a thread going hot, a first reply on a
/// thread) is decided by the caller; the handler only scores and records
/// what it is told happened.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEvent {
    pub email: String,
    pub display_name: Option<String>,
    pub kind: ActionKind,
    pub metrics: Option<PostMetrics>,
    /// Defaults to now when omitted
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Handles incoming activity events
pub struct EventHandler {
    pool: PgPool,
}

impl EventHandler {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Score one event, persist it, and bring the donor's totals up to date
    pub async fn handle(&self, event: ActivityEvent) -> Result<ActivityRecord, common::Error> {
        let occurred_at = event.occurred_at.unwrap_or_else(Utc::now);

        let metrics = match event.kind {
            ActionKind::CreateThread | ActionKind::PostReply => event.metrics,
            _ => {
                if event.metrics.is_some() {
                    warn!(
                        "Ignoring post metrics on {} event from {}",
                        event.kind.as_str(),
                        event.email
                    );
                }
                None
            }
        };

        let xp = score_event(event.kind, metrics.as_ref())?;

        let display_name = event
            .display_name
            .clone()
            .unwrap_or_else(|| default_display_name(&event.email));

        let donor = db::donors::upsert(&self.pool, &event.email, &display_name, None)
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let record = db::activity::insert(
            &self.pool,
            donor.id,
            event.kind,
            metrics.as_ref().map(|m| m.word_count),
            metrics.as_ref().map(|m| m.has_media),
            metrics.as_ref().map(|m| m.post_number_today),
            xp,
            occurred_at,
        )
        .await
        .map_err(|e| common::Error::Database(e.to_string()))?;

        // Any qualifying action keeps the streak alive
        db::streaks::touch(&self.pool, donor.id, occurred_at.date_naive())
            .await
            .map_err(|e| common::Error::Database(e.to_string()))?;

        let donor = refresh_donor(&self.pool, donor.id).await?;

        info!(
            "Awarded {} XP to {} for {} (unified {})",
            xp,
            donor.email,
            event.kind.as_str(),
            donor.unified_xp
        );

        Ok(record)
    }
}

fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_display_name_uses_local_part() {
        assert_eq!(default_display_name("kara@example.com"), "kara");
        assert_eq!(default_display_name("not-an-email"), "not-an-email");
    }
}
