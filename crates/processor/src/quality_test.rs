#[cfg(test)]
mod tests {
    use crate::quality::*;

    fn plain(word_count: i32, has_media: bool, post_number_today: i32) -> PostMetrics {
        PostMetrics {
            word_count,
            has_media,
            post_number_today,
        }
    }

    // Length tier boundaries
    #[test]
    fn test_no_length_bonus_below_100_words() {
        assert_eq!(score_post(100, &plain(99, false, 1)), 100);
    }

    #[test]
    fn test_substantial_post_at_exactly_100_words() {
        assert_eq!(score_post(100, &plain(100, false, 1)), 150);
    }

    #[test]
    fn test_long_post_at_exactly_500_words() {
        assert_eq!(score_post(100, &plain(500, false, 1)), 200);
    }

    #[test]
    fn test_length_tiers_are_not_cumulative() {
        // A 600-word post gets the 2.0 tier only, not 2.0 × 1.5
        assert_eq!(score_post(100, &plain(600, false, 1)), 200);
    }

    // Media bonus
    #[test]
    fn test_media_bonus() {
        assert_eq!(score_post(100, &plain(0, true, 1)), 120);
    }

    #[test]
    fn test_media_bonus_floors_fractional_xp() {
        // 7 × 1.2 = 8.4, floored to 8
        assert_eq!(score_post(7, &plain(0, true, 1)), 8);
    }

    // Rate limit boundaries
    #[test]
    fn test_tenth_post_of_day_is_full_rate() {
        assert_eq!(score_post(100, &plain(0, false, 10)), 100);
    }

    #[test]
    fn test_eleventh_post_of_day_is_half_rate() {
        assert_eq!(score_post(100, &plain(0, false, 11)), 50);
    }

    #[test]
    fn test_twentieth_post_is_half_twenty_first_is_quarter() {
        assert_eq!(score_post(100, &plain(0, false, 20)), 50);
        assert_eq!(score_post(100, &plain(0, false, 21)), 25);
        assert_eq!(score_post(100, &plain(0, false, 500)), 25);
    }

    // Factor composition
    #[test]
    fn test_neutral_metrics_return_base_unchanged() {
        assert_eq!(score_post(20, &plain(0, false, 1)), 20);
    }

    #[test]
    fn test_all_factors_multiply() {
        // 100 × 2.0 × 1.2 × 0.25 = 60
        assert_eq!(score_post(100, &plain(500, true, 21)), 60);
        // 20 × 1.5 × 1.2 × 0.5 = 18
        assert_eq!(score_post(20, &plain(100, true, 11)), 18);
    }

    #[test]
    fn test_floor_never_exceeds_unfloored_product() {
        for base in [1i64, 3, 7, 20, 25, 100, 999] {
            for wc in [0, 99, 100, 499, 500] {
                for media in [false, true] {
                    for nth in [1, 10, 11, 20, 21] {
                        let scored = score_post(base, &plain(wc, media, nth));
                        let length = if wc >= 500 {
                            2.0
                        } else if wc >= 100 {
                            1.5
                        } else {
                            1.0
                        };
                        let media_f = if media { 1.2 } else { 1.0 };
                        let rate = if nth <= 10 {
                            1.0
                        } else if nth <= 20 {
                            0.5
                        } else {
                            0.25
                        };
                        let exact = base as f64 * length * media_f * rate;
                        assert!(
                            scored as f64 <= exact + 1e-9,
                            "rounding must never invent XP: base={} wc={} media={} nth={}",
                            base,
                            wc,
                            media,
                            nth
                        );
                        assert!(scored as f64 > exact - 1.0 - 1e-9, "floor lost more than the fraction");
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_base_stays_zero() {
        assert_eq!(score_post(0, &plain(500, true, 1)), 0);
    }
}
