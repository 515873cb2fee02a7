//! Dashboard quest board
//!
//! The user's own copy of the quest list. Starting and completing quests here
//! never touches the admin catalog or the review queue.

use tracing::debug;

use crate::domain::{AttemptStatus, BoardQuest, QuestId};
use crate::seed;

#[derive(Debug, Clone, Default)]
pub struct QuestBoard {
    quests: Vec<BoardQuest>,
    /// Completed quest IDs in completion order, no duplicates
    completed: Vec<QuestId>,
}

impl QuestBoard {
    pub fn new(quests: Vec<BoardQuest>) -> Self {
        Self {
            quests,
            completed: Vec::new(),
        }
    }

    /// Board populated with the fixed dashboard quests
    pub fn seeded() -> Self {
        Self::new(seed::board_quests())
    }

    pub fn quests(&self) -> &[BoardQuest] {
        &self.quests
    }

    pub fn get(&self, id: &str) -> Option<&BoardQuest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// IDs flagged completed, in completion order
    pub fn completed(&self) -> &[QuestId] {
        &self.completed
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|c| c == id)
    }

    /// Quests not yet started
    pub fn available_count(&self) -> usize {
        self.quests
            .iter()
            .filter(|q| q.status == AttemptStatus::Available)
            .count()
    }

    /// Move a quest from available to pending.
    ///
    /// Returns the new status, or `None` when the quest is unknown or was
    /// already started.
    pub fn start_quest(&mut self, id: &str) -> Option<AttemptStatus> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id && q.status == AttemptStatus::Available)?;
        quest.status = AttemptStatus::Pending;
        debug!("Started quest {} '{}'", quest.id, quest.title);
        Some(quest.status)
    }

    /// Flag a quest completed.
    ///
    /// The ID joins the completed set at most once; returns `false` when it was
    /// already there. A listed quest is also marked completed.
    pub fn complete_quest(&mut self, id: &str) -> bool {
        if self.is_completed(id) {
            return false;
        }
        self.completed.push(id.to_string());
        if let Some(quest) = self.quests.iter_mut().find(|q| q.id == id) {
            quest.status = AttemptStatus::Completed;
        }
        debug!("Completed quest {}", id);
        true
    }
}

/// Dashboard "rank progress" bar value for a global rank, in percent.
///
/// Always within `0.0..=100.0`; every rank past 11 reads as 100.
pub fn rank_progress(rank: u32) -> f32 {
    ((rank.saturating_sub(1) as f32 / 10.0) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_moves_available_to_pending() {
        let mut board = QuestBoard::seeded();
        assert_eq!(board.start_quest("2"), Some(AttemptStatus::Pending));
        assert_eq!(board.get("2").unwrap().status, AttemptStatus::Pending);
        assert_eq!(board.available_count(), 3);

        // Only available quests can be started
        assert_eq!(board.start_quest("2"), None);
        assert_eq!(board.start_quest("nope"), None);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut once = QuestBoard::seeded();
        assert!(once.complete_quest("1"));

        let mut twice = QuestBoard::seeded();
        assert!(twice.complete_quest("1"));
        assert!(!twice.complete_quest("1"));

        assert_eq!(once.completed(), twice.completed());
        assert_eq!(twice.completed(), ["1".to_string()]);
        assert_eq!(twice.get("1").unwrap().status, AttemptStatus::Completed);
    }

    #[test]
    fn test_complete_keeps_order() {
        let mut board = QuestBoard::seeded();
        board.complete_quest("3");
        board.complete_quest("1");
        board.complete_quest("3");
        assert_eq!(board.completed(), ["3".to_string(), "1".to_string()]);
        assert!(board.is_completed("3"));
        assert!(!board.is_completed("2"));
    }

    #[test]
    fn test_completed_quest_cannot_be_started() {
        let mut board = QuestBoard::seeded();
        board.complete_quest("4");
        assert_eq!(board.start_quest("4"), None);
    }

    #[test]
    fn test_rank_progress() {
        assert_eq!(rank_progress(1), 0.0);
        assert!((rank_progress(7) - 60.0).abs() < 0.001);
        assert_eq!(rank_progress(0), 0.0);
    }

    #[test]
    fn test_rank_progress_caps_at_full_bar() {
        assert_eq!(rank_progress(11), 100.0);
        assert_eq!(rank_progress(16), 100.0);
        assert_eq!(rank_progress(u32::MAX), 100.0);
    }
}
