use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::QuestType;

/// Dashboard header numbers for the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_xp: u32,
    pub rank: u32,
    pub weekly_xp: u32,
    pub completed_quests: u32,
    /// Number of badges earned
    pub badges: u32,
}

/// Profile page numbers.
///
/// Independent of [`UserStats`]; both are fixed snapshots and may disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_xp: u32,
    pub level: u32,
    pub rank: u32,
    pub completed_quests: u32,
    pub weekly_xp: u32,
    pub monthly_xp: u32,
    /// Consecutive active days
    pub streak: u32,
    pub badges: Vec<String>,
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardUser {
    pub id: String,
    pub name: String,
    /// All-time XP
    pub xp: u32,
    pub level: u32,
    /// 1-based position in the current ordering
    pub rank: u32,
    pub weekly_xp: u32,
    pub completed_quests: u32,
    pub badges: Vec<String>,
}

/// Entry in the profile's recent achievements list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp_awarded: u32,
    pub date: NaiveDate,
    pub quest_type: QuestType,
}

/// Entry in the dashboard's recent activity feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub xp: u32,
    /// Relative time label ("2 hours ago")
    pub time: String,
}
