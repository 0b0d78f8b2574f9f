//! Domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A donor account migrated from the original crowdfunding campaign
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Donor {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub donation_xp: i64,
    pub participation_xp: i64,
    pub unified_xp: i64,
    pub rank_title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single pledge toward a campaign
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pledge {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub campaign: Option<String>,
    pub amount_cents: i64,
    pub pledged_at: DateTime<Utc>,
}

/// Forum actions that earn participation XP.
///
/// The set is closed: scoring is an exhaustive match, so adding a variant
/// without a point value is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ActionKind {
    CreateThread,
    PostReply,
    ReceiveLike,
    ReceiveThank,
    ThreadPinned,
    HotThreadBonus,
    ViralThreadBonus,
    FirstReplyBonus,
    ThreadStarterBonus,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateThread => "create_thread",
            Self::PostReply => "post_reply",
            Self::ReceiveLike => "receive_like",
            Self::ReceiveThank => "receive_thank",
            Self::ThreadPinned => "thread_pinned",
            Self::HotThreadBonus => "hot_thread_bonus",
            Self::ViralThreadBonus => "viral_thread_bonus",
            Self::FirstReplyBonus => "first_reply_bonus",
            Self::ThreadStarterBonus => "thread_starter_bonus",
        }
    }
}

/// One recorded XP-qualifying action.
///
/// Post metrics are only present for post-shaped actions (threads and
/// replies); reaction and bonus events store NULLs.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityRecord {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub kind: ActionKind,
    pub word_count: Option<i32>,
    pub has_media: Option<bool>,
    pub post_number_today: Option<i32>,
    pub xp_earned: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Snapshot of which optional profile fields a donor has filled in
#[derive(Debug, Clone, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileCompletionState {
    pub has_avatar: bool,
    pub has_bio: bool,
    pub has_signature: bool,
    pub social_links: i32,
    pub has_favorite_series: bool,
    pub has_location: bool,
    pub profile_views: i32,
}

/// A donor's consecutive-day activity streak.
///
/// `consecutive_days` is the already-adjusted count; any grace period or
/// freeze is applied before this row is written.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StreakState {
    pub donor_id: Uuid,
    pub consecutive_days: i32,
    pub last_active_on: NaiveDate,
}

/// Donor stats for a specific time period
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DonorStats {
    pub threads_created: i32,
    pub replies_posted: i32,
    pub likes_received: i32,
    pub thanks_received: i32,
    pub streak_days: i32,
    pub total_pledged_cents: i64,
}

/// Leaderboard entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub donor: Donor,
    pub score: i64,
    pub stats: DonorStats,
}
