//! Leaderboard ranking
//!
//! The user set is a fixed snapshot. The all-time view is the snapshot as
//! stored; the weekly view re-sorts it by weekly XP.

use serde::{Deserialize, Serialize};

use crate::domain::LeaderboardUser;
use crate::seed;

/// Which XP measure a ranking uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    AllTime,
    Weekly,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::AllTime => "Total",
            Period::Weekly => "Weekly",
        }
    }

    /// The XP figure shown next to a user for this period
    pub fn xp_of(&self, user: &LeaderboardUser) -> u32 {
        match self {
            Period::AllTime => user.xp,
            Period::Weekly => user.weekly_xp,
        }
    }
}

/// Fixed set of users in all-time rank order
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    users: Vec<LeaderboardUser>,
}

impl Leaderboard {
    /// Users must already be in all-time rank order
    pub fn new(users: Vec<LeaderboardUser>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(seed::leaderboard_users())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All-time ranking: the snapshot as stored
    pub fn rank_by_total(&self) -> Vec<LeaderboardUser> {
        self.users.clone()
    }

    /// Weekly ranking: stable sort by weekly XP, highest first, ranks 1..=N.
    ///
    /// Ties keep their all-time order.
    pub fn rank_by_weekly(&self) -> Vec<LeaderboardUser> {
        let mut ranked = self.users.clone();
        ranked.sort_by(|a, b| b.weekly_xp.cmp(&a.weekly_xp));
        for (index, user) in ranked.iter_mut().enumerate() {
            user.rank = index as u32 + 1;
        }
        ranked
    }

    pub fn view(&self, period: Period) -> Vec<LeaderboardUser> {
        match period {
            Period::AllTime => self.rank_by_total(),
            Period::Weekly => self.rank_by_weekly(),
        }
    }
}

/// Top three of a ranking (fewer if the ranking is shorter)
pub fn podium(ranked: &[LeaderboardUser]) -> &[LeaderboardUser] {
    &ranked[..ranked.len().min(3)]
}

/// Medal shown for the top three ranks
pub fn rank_medal(rank: u32) -> Option<&'static str> {
    match rank {
        1 => Some("crown"),
        2 => Some("trophy"),
        3 => Some("medal"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, xp: u32, weekly_xp: u32, rank: u32) -> LeaderboardUser {
        LeaderboardUser {
            id: id.to_string(),
            name: format!("User {}", id),
            xp,
            level: 1,
            rank,
            weekly_xp,
            completed_quests: 0,
            badges: Vec::new(),
        }
    }

    #[test]
    fn test_weekly_ranking_of_seed_keeps_order() {
        let board = Leaderboard::seeded();
        let weekly = board.rank_by_weekly();

        let xp: Vec<u32> = weekly.iter().map(|u| u.weekly_xp).collect();
        assert_eq!(xp, vec![450, 380, 320, 290, 275, 250, 220, 200]);
        let ranks: Vec<u32> = weekly.iter().map(|u| u.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<u32>>());
        let ids: Vec<&str> = weekly.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_weekly_ranking_resorts_and_renumbers() {
        let board = Leaderboard::new(vec![
            user("a", 900, 10, 1),
            user("b", 800, 70, 2),
            user("c", 700, 40, 3),
            user("d", 600, 70, 4),
        ]);
        let weekly = board.rank_by_weekly();

        assert!(weekly.windows(2).all(|w| w[0].weekly_xp >= w[1].weekly_xp));
        let ids: Vec<&str> = weekly.iter().map(|u| u.id.as_str()).collect();
        // b and d tie on 70; b comes first in the stored order
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
        let ranks: Vec<u32> = weekly.iter().map(|u| u.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        // The stored snapshot is untouched
        assert_eq!(board.rank_by_total()[0].id, "a");
        assert_eq!(board.rank_by_total()[0].rank, 1);
    }

    #[test]
    fn test_view_and_podium() {
        let board = Leaderboard::seeded();
        let all_time = board.view(Period::AllTime);
        assert_eq!(all_time, board.rank_by_total());
        assert_eq!(podium(&all_time).len(), 3);
        assert_eq!(Period::Weekly.xp_of(&all_time[0]), 450);
        assert_eq!(Period::AllTime.xp_of(&all_time[0]), 8750);

        let short = vec![user("x", 1, 1, 1)];
        assert_eq!(podium(&short).len(), 1);
        assert!(podium(&[]).is_empty());
    }

    #[test]
    fn test_rank_medal() {
        assert_eq!(rank_medal(1), Some("crown"));
        assert_eq!(rank_medal(3), Some("medal"));
        assert_eq!(rank_medal(4), None);
    }
}
