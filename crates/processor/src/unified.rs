//! Dual-path XP reconciliation
//!
//! Donation XP and participation XP are not summed: the larger path wins
//! and dual engagement earns a crossover bonus proportional to the smaller
//! one. A donor who never posts gets exactly their donation XP.

/// Fraction of the smaller path paid as crossover bonus (1/10).
const CROSSOVER_DIVISOR: i64 = 10;

/// XP derived from total pledged money: $1 = 100 XP, i.e. 1 XP per cent.
pub fn donation_xp_for_cents(amount_cents: i64) -> i64 {
    debug_assert!(amount_cents >= 0, "pledge totals must be non-negative");
    amount_cents
}

/// Combine the donation and participation paths into the rank-determining
/// score.
///
/// `max(a, b) + floor(min(a, b) / 10)` when both paths are active, plain
/// `max(a, b)` otherwise. Symmetric in its arguments and monotonically
/// non-decreasing in each; never below either input.
pub fn unified_xp(donation_xp: i64, participation_xp: i64) -> i64 {
    debug_assert!(donation_xp >= 0, "donation_xp must be non-negative");
    debug_assert!(participation_xp >= 0, "participation_xp must be non-negative");

    let base = donation_xp.max(participation_xp);
    let crossover = if donation_xp > 0 && participation_xp > 0 {
        donation_xp.min(participation_xp) / CROSSOVER_DIVISOR
    } else {
        0
    };

    base + crossover
}
