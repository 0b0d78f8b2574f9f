#[cfg(test)]
mod tests {
    use crate::unified::*;

    // Dominance: zero on one path degrades exactly to the other path
    #[test]
    fn test_donation_only_donor_keeps_raw_donation_xp() {
        assert_eq!(unified_xp(5000, 0), 5000);
        assert_eq!(unified_xp(1, 0), 1);
    }

    #[test]
    fn test_participation_only_donor_keeps_raw_participation_xp() {
        assert_eq!(unified_xp(0, 7300), 7300);
    }

    #[test]
    fn test_both_zero() {
        assert_eq!(unified_xp(0, 0), 0);
    }

    // The worked scenario: $100 donor with a modest forum presence
    #[test]
    fn test_crossover_scenario() {
        // base 10000, crossover floor(2000 × 0.1) = 200
        assert_eq!(unified_xp(10_000, 2_000), 10_200);
    }

    #[test]
    fn test_crossover_uses_integer_floor() {
        assert_eq!(unified_xp(100, 15), 101);
        assert_eq!(unified_xp(100, 19), 101);
        // Too small for any bonus after the floor
        assert_eq!(unified_xp(9, 5), 9);
    }

    #[test]
    fn test_exact_closed_form_on_grid() {
        for a in 0..60i64 {
            for b in 0..60i64 {
                let expected = a.max(b)
                    + if a > 0 && b > 0 { a.min(b) / 10 } else { 0 };
                assert_eq!(unified_xp(a, b), expected, "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_symmetry() {
        for (a, b) in [(0, 0), (0, 42), (17, 30), (10_000, 2_000), (999, 999)] {
            assert_eq!(unified_xp(a, b), unified_xp(b, a));
        }
    }

    #[test]
    fn test_monotonic_in_each_argument() {
        for a in 0..50i64 {
            for b in 0..50i64 {
                assert!(unified_xp(a + 1, b) >= unified_xp(a, b));
                assert!(unified_xp(a, b + 1) >= unified_xp(a, b));
            }
        }
    }

    #[test]
    fn test_never_below_either_path() {
        for (a, b) in [(0, 5), (12, 7), (300, 2_900), (10_000, 10_000)] {
            assert!(unified_xp(a, b) >= a.max(b));
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(unified_xp(123, 456), unified_xp(123, 456));
    }

    // Donation path conversion: $1 pledged = 100 XP
    #[test]
    fn test_donation_xp_per_cent() {
        assert_eq!(donation_xp_for_cents(0), 0);
        // $123.45 pledged
        assert_eq!(donation_xp_for_cents(12_345), 12_345);
    }
}
