//! XP computation and activity processing

pub mod actions;
pub mod handler;
pub mod profile;
pub mod quality;
pub mod ranks;
pub mod recalculate;
pub mod scores;
pub mod streaks;
pub mod unified;

#[cfg(test)]
mod quality_test;
#[cfg(test)]
mod unified_test;

pub use handler::{ActivityEvent, EventHandler};
pub use recalculate::{recalculate_all_xp, RecalculationStats};
pub use scores::refresh_donor;
