//! Post quality multiplier
//!
//! Adjusts a post's base XP by three independent factors:
//! - length tier (longer posts earn more, highest tier only)
//! - media bonus (attached image/video)
//! - same-day posting rate penalty (anti-spam)

use serde::{Deserialize, Serialize};

/// Metrics describing one post being scored
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PostMetrics {
    pub word_count: i32,
    pub has_media: bool,
    /// 1-based ordinal of this post among the author's posts that day
    pub post_number_today: i32,
}

// Factors are held in percent so the final floor is a single exact integer
// division: rounding can lose fractional XP but never invent it.
const LONG_POST_WORDS: i32 = 500;
const LONG_POST_PCT: i64 = 200;
const SUBSTANTIAL_POST_WORDS: i32 = 100;
const SUBSTANTIAL_POST_PCT: i64 = 150;

const MEDIA_PCT: i64 = 120;

const FULL_RATE_POSTS_PER_DAY: i32 = 10;
const HALF_RATE_POSTS_PER_DAY: i32 = 20;

fn length_pct(word_count: i32) -> i64 {
    debug_assert!(word_count >= 0, "word_count must be non-negative");
    if word_count >= LONG_POST_WORDS {
        LONG_POST_PCT
    } else if word_count >= SUBSTANTIAL_POST_WORDS {
        SUBSTANTIAL_POST_PCT
    } else {
        100
    }
}

fn media_pct(has_media: bool) -> i64 {
    if has_media {
        MEDIA_PCT
    } else {
        100
    }
}

fn rate_limit_pct(post_number_today: i32) -> i64 {
    debug_assert!(post_number_today >= 1, "post_number_today is 1-based");
    if post_number_today <= FULL_RATE_POSTS_PER_DAY {
        100
    } else if post_number_today <= HALF_RATE_POSTS_PER_DAY {
        50
    } else {
        25
    }
}

/// Apply the quality multiplier to a post's base XP.
///
/// Returns `floor(base × length × media × rate)`. A plain first post with
/// no media and under 100 words has multiplier exactly 1.0 and comes back
/// unchanged.
pub fn score_post(base_xp: i64, metrics: &PostMetrics) -> i64 {
    debug_assert!(base_xp >= 0, "base_xp must be non-negative");

    base_xp
        * length_pct(metrics.word_count)
        * media_pct(metrics.has_media)
        * rate_limit_pct(metrics.post_number_today)
        / 1_000_000
}
