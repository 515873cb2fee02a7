//! Leaderboard and level statistics
//!
//! Read-only views over fixed user snapshots. Nothing here has a write path.

mod leaderboard;
mod levels;

pub use leaderboard::{Leaderboard, Period, podium, rank_medal};
pub use levels::{LevelCurve, LevelProgress};
