use tracing::warn;

use super::{AdminAction, Notification};
use crate::catalog::{CatalogError, QuestCatalog};
use crate::config::Settings;
use crate::domain::ReviewAction;
use crate::review::{SubmissionQueue, SubmissionRequest};

/// State owned by the admin view: the quest catalog and the review queue
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub catalog: QuestCatalog,
    pub queue: SubmissionQueue,
}

impl AdminState {
    pub fn seeded() -> Self {
        Self {
            catalog: QuestCatalog::seeded(),
            queue: SubmissionQueue::seeded(),
        }
    }

    /// Seeded state that creates quests with the configured default XP
    pub fn configured(settings: &Settings) -> Self {
        Self {
            catalog: QuestCatalog::seeded().with_default_xp(settings.default_quest_xp),
            queue: SubmissionQueue::seeded(),
        }
    }

    /// Submissions waiting for review
    pub fn pending_count(&self) -> usize {
        self.queue.pending_count()
    }

    /// Quests users can currently see
    pub fn active_quest_count(&self) -> usize {
        self.catalog.active_count()
    }

    /// Run one admin action and return the notification it emits, if any
    pub fn apply(&mut self, action: AdminAction) -> Option<Notification> {
        match action {
            AdminAction::CreateQuest(input) => match self.catalog.create_quest(input) {
                Ok(_) => Some(Notification::info(
                    "Quest Created!",
                    "Your new quest has been added and is now active.",
                )),
                Err(CatalogError::MissingField(field)) => {
                    warn!("Quest not created, missing {}", field);
                    Some(Notification::error(
                        "Error",
                        "Please fill in all required fields",
                    ))
                }
                Err(e) => {
                    warn!("Quest not created: {}", e);
                    Some(Notification::error("Error", e.to_string()))
                }
            },
            AdminAction::ToggleStatus { id } => {
                self.catalog.toggle_status(&id);
                None
            }
            AdminAction::DeleteQuest { id } => {
                // Fires whether or not the quest existed
                self.catalog.delete_quest(&id);
                Some(Notification::info(
                    "Quest Deleted",
                    "The quest has been removed from the system.",
                ))
            }
            AdminAction::ReviewSubmission { id, decision } => {
                self.queue.review_submission(&id, decision, &self.catalog);
                Some(match decision {
                    ReviewAction::Approve => Notification::info(
                        "Submission Approved!",
                        "XP has been awarded to the user.",
                    ),
                    ReviewAction::Reject => Notification::info(
                        "Submission Rejected",
                        "The submission has been rejected.",
                    ),
                })
            }
            AdminAction::Submit {
                quest_id,
                user_id,
                user_name,
                submission_data,
            } => {
                let request = SubmissionRequest {
                    quest_id,
                    user_id,
                    user_name,
                    submission_data,
                };
                match self.queue.submit(request, &self.catalog) {
                    Ok(_) => Some(Notification::info(
                        "Submission Received",
                        "The submission is waiting for review.",
                    )),
                    Err(e) => {
                        warn!("Submission refused: {}", e);
                        Some(Notification::error("Error", e.to_string()))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewQuest;
    use crate::domain::{CatalogStatus, SubmissionStatus};
    use crate::state::Variant;

    #[test]
    fn test_create_emits_success() {
        let mut state = AdminState::seeded();
        let note = state
            .apply(AdminAction::CreateQuest(NewQuest::new("Test", "Do X", "Misc")))
            .unwrap();
        assert_eq!(note.title, "Quest Created!");
        assert_eq!(note.variant, Variant::Default);
        assert_eq!(state.catalog.len(), 5);
        assert_eq!(state.active_quest_count(), 4);
    }

    #[test]
    fn test_configured_default_xp_applies_to_created_quests() {
        let settings = Settings {
            default_quest_xp: 250,
            ..Settings::default()
        };
        let mut state = AdminState::configured(&settings);
        state.apply(AdminAction::CreateQuest(NewQuest::new("Test", "Do X", "Misc")));
        assert_eq!(state.catalog.quests()[0].xp, 250);
        assert_eq!(state.pending_count(), 2);
    }

    #[test]
    fn test_invalid_create_emits_error_and_changes_nothing() {
        let mut state = AdminState::seeded();
        let note = state
            .apply(AdminAction::CreateQuest(NewQuest::new("Test", "", "Misc")))
            .unwrap();
        assert!(note.is_error());
        assert_eq!(note.description, "Please fill in all required fields");
        assert_eq!(state.catalog.len(), 4);

        let note = state
            .apply(AdminAction::CreateQuest(
                NewQuest::new("Test", "Do X", "Misc").with_xp(0),
            ))
            .unwrap();
        assert!(note.is_error());
        assert_eq!(state.catalog.len(), 4);
    }

    #[test]
    fn test_toggle_is_silent() {
        let mut state = AdminState::seeded();
        let note = state.apply(AdminAction::ToggleStatus { id: "1".to_string() });
        assert!(note.is_none());
        assert_eq!(state.catalog.get("1").unwrap().status, CatalogStatus::Inactive);
    }

    #[test]
    fn test_delete_notifies_even_without_match() {
        let mut state = AdminState::seeded();
        let note = state
            .apply(AdminAction::DeleteQuest { id: "missing".to_string() })
            .unwrap();
        assert_eq!(note.title, "Quest Deleted");
        assert_eq!(state.catalog.len(), 4);
    }

    #[test]
    fn test_review_updates_pending_count() {
        let mut state = AdminState::seeded();
        assert_eq!(state.pending_count(), 2);

        let note = state
            .apply(AdminAction::ReviewSubmission {
                id: "1".to_string(),
                decision: ReviewAction::Approve,
            })
            .unwrap();
        assert_eq!(note.title, "Submission Approved!");
        assert_eq!(state.pending_count(), 1);

        state.apply(AdminAction::ReviewSubmission {
            id: "2".to_string(),
            decision: ReviewAction::Reject,
        });
        assert_eq!(state.pending_count(), 0);
        assert_eq!(
            state.queue.get("2").unwrap().status,
            SubmissionStatus::Rejected
        );
    }

    #[test]
    fn test_submit_to_inactive_quest_is_refused() {
        let mut state = AdminState::seeded();
        let note = state
            .apply(AdminAction::Submit {
                quest_id: "4".to_string(),
                user_id: "user5".to_string(),
                user_name: "David Kim".to_string(),
                submission_data: "Joined as davidk".to_string(),
            })
            .unwrap();
        assert!(note.is_error());
        assert_eq!(state.pending_count(), 2);
    }
}
