use super::{DashboardAction, Notification};
use crate::board::QuestBoard;
use crate::domain::{ActivityEntry, UserStats};
use crate::seed;

/// State owned by the dashboard view.
///
/// Independent of [`AdminState`](super::AdminState): starting or completing a
/// quest here creates no submission.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub board: QuestBoard,
    pub stats: UserStats,
    pub activity: Vec<ActivityEntry>,
}

impl DashboardState {
    pub fn seeded() -> Self {
        Self {
            board: QuestBoard::seeded(),
            stats: seed::dashboard_stats(),
            activity: seed::recent_activity(),
        }
    }

    /// Run one dashboard action and return the notification it emits, if any
    pub fn apply(&mut self, action: DashboardAction) -> Option<Notification> {
        match action {
            DashboardAction::StartQuest { id } => {
                self.board.start_quest(&id)?;
                let title = self
                    .board
                    .get(&id)
                    .map(|q| q.title.clone())
                    .unwrap_or_default();
                Some(Notification::info(
                    "Quest Started!",
                    format!("\"{}\" is now pending.", title),
                ))
            }
            DashboardAction::CompleteQuest { id } => {
                self.board.complete_quest(&id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttemptStatus;

    #[test]
    fn test_start_notifies_once() {
        let mut state = DashboardState::seeded();
        let note = state
            .apply(DashboardAction::StartQuest { id: "3".to_string() })
            .unwrap();
        assert_eq!(note.title, "Quest Started!");
        assert!(note.description.contains("Share your story"));

        assert!(state
            .apply(DashboardAction::StartQuest { id: "3".to_string() })
            .is_none());
        assert_eq!(state.board.get("3").unwrap().status, AttemptStatus::Pending);
    }

    #[test]
    fn test_complete_is_silent_and_idempotent() {
        let mut state = DashboardState::seeded();
        for _ in 0..2 {
            let note = state.apply(DashboardAction::CompleteQuest { id: "1".to_string() });
            assert!(note.is_none());
        }
        assert_eq!(state.board.completed().len(), 1);
        // Snapshot numbers have no write path
        assert_eq!(state.stats, seed::dashboard_stats());
    }
}
