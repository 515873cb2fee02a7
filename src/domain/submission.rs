use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{QuestId, SubmissionStatus};

/// A user's claim of having completed a quest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub quest_id: QuestId,
    /// Copy of the quest title taken at submit time, not kept in sync
    pub quest_title: String,
    pub user_id: String,
    pub user_name: String,
    /// Free-text proof supplied by the user
    pub submission_data: String,
    pub status: SubmissionStatus,
    pub submitted_at: NaiveDateTime,
    /// Set only for approved submissions whose quest still existed at review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_awarded: Option<u32>,
}

impl Submission {
    pub fn is_pending(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    /// Submission time as shown in the review list (`YYYY-MM-DD HH:MM`)
    pub fn submitted_label(&self) -> String {
        self.submitted_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
