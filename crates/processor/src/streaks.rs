//! Streak bonuses

/// Bonus XP for a consecutive-day activity streak.
///
/// Thresholds are checked top down and exactly one value is returned: a
/// 400-day streak pays the one-year bonus, not the sum of every tier below
/// it. The day count is assumed to be already adjusted by the caller.
pub fn streak_bonus(consecutive_days: i32) -> i64 {
    debug_assert!(consecutive_days >= 0, "streak length must be non-negative");

    match consecutive_days {
        d if d >= 365 => 5000,
        d if d >= 180 => 2000,
        d if d >= 90 => 1000,
        d if d >= 30 => 500,
        d if d >= 7 => 100,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bonus_below_a_week() {
        assert_eq!(streak_bonus(0), 0);
        assert_eq!(streak_bonus(1), 0);
        assert_eq!(streak_bonus(6), 0);
    }

    #[test]
    fn test_week_tier() {
        assert_eq!(streak_bonus(7), 100);
        assert_eq!(streak_bonus(29), 100);
    }

    #[test]
    fn test_month_tier() {
        assert_eq!(streak_bonus(30), 500);
        assert_eq!(streak_bonus(89), 500);
    }

    #[test]
    fn test_quarter_tier() {
        assert_eq!(streak_bonus(90), 1000);
        assert_eq!(streak_bonus(179), 1000);
    }

    #[test]
    fn test_half_year_tier() {
        assert_eq!(streak_bonus(180), 2000);
        assert_eq!(streak_bonus(364), 2000);
    }

    #[test]
    fn test_year_tier_is_single_not_cumulative() {
        assert_eq!(streak_bonus(365), 5000);
        assert_eq!(streak_bonus(1000), 5000);
    }
}
