//! Submission review queue
//!
//! Admins approve or reject user submissions. Approval looks the reward up in
//! the current catalog, so a submission whose quest was deleted is approved
//! without XP.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::catalog::QuestCatalog;
use crate::domain::{ReviewAction, Submission, SubmissionStatus};
use crate::seed;

/// Why a submission could not be accepted into the queue
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Quest not found: {0}")]
    QuestNotFound(String),

    #[error("Quest {0} is not active")]
    QuestInactive(String),

    #[error("Submission data must not be empty")]
    EmptyData,
}

/// Who submits and what they submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub quest_id: String,
    pub user_id: String,
    pub user_name: String,
    pub submission_data: String,
}

/// Ordered list of submissions owned by the admin view
#[derive(Debug, Clone, Default)]
pub struct SubmissionQueue {
    submissions: Vec<Submission>,
}

impl SubmissionQueue {
    pub fn new(submissions: Vec<Submission>) -> Self {
        Self { submissions }
    }

    /// Queue populated with the fixed seed submissions
    pub fn seeded() -> Self {
        Self::new(seed::submissions())
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn get(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Submissions with the given status, in queue order
    pub fn with_status(&self, status: SubmissionStatus) -> impl Iterator<Item = &Submission> {
        self.submissions.iter().filter(move |s| s.status == status)
    }

    /// Number of submissions waiting for review
    pub fn pending_count(&self) -> usize {
        self.with_status(SubmissionStatus::Pending).count()
    }

    /// Apply an admin decision to a submission.
    ///
    /// The transition is applied whatever the current status is, so reviewing
    /// twice simply re-sets the end state. Returns `None` if no submission has
    /// this ID.
    pub fn review_submission(
        &mut self,
        id: &str,
        action: ReviewAction,
        catalog: &QuestCatalog,
    ) -> Option<&Submission> {
        let submission = self.submissions.iter_mut().find(|s| s.id == id)?;

        if !submission.is_pending() {
            debug!(
                "Submission {} already {}, re-applying {:?}",
                submission.id, submission.status, action
            );
        }

        submission.status = action.resulting_status();
        submission.xp_awarded = match action {
            ReviewAction::Approve => {
                let xp = catalog.get(&submission.quest_id).map(|q| q.xp);
                if xp.is_none() {
                    warn!(
                        "Submission {} references missing quest {}, no XP awarded",
                        submission.id, submission.quest_id
                    );
                }
                xp
            }
            ReviewAction::Reject => None,
        };

        info!(
            "Submission {} by {} {}",
            submission.id, submission.user_name, submission.status
        );
        Some(submission)
    }

    /// Add a new pending submission for an active quest
    pub fn submit(
        &mut self,
        request: SubmissionRequest,
        catalog: &QuestCatalog,
    ) -> Result<&Submission, SubmitError> {
        self.submit_at(request, catalog, Local::now().naive_local())
    }

    /// Same as [`submit`](Self::submit) with an explicit timestamp
    pub fn submit_at(
        &mut self,
        request: SubmissionRequest,
        catalog: &QuestCatalog,
        submitted_at: NaiveDateTime,
    ) -> Result<&Submission, SubmitError> {
        let quest = catalog
            .get(&request.quest_id)
            .ok_or_else(|| SubmitError::QuestNotFound(request.quest_id.clone()))?;
        if !quest.is_active() {
            return Err(SubmitError::QuestInactive(quest.id.clone()));
        }
        if request.submission_data.trim().is_empty() {
            return Err(SubmitError::EmptyData);
        }

        let submission = Submission {
            id: uuid::Uuid::new_v4().to_string(),
            quest_id: quest.id.clone(),
            quest_title: quest.title.clone(),
            user_id: request.user_id,
            user_name: request.user_name,
            submission_data: request.submission_data.trim().to_string(),
            status: SubmissionStatus::Pending,
            submitted_at,
            xp_awarded: None,
        };

        info!(
            "New submission {} for quest {} from {}",
            submission.id, submission.quest_id, submission.user_name
        );
        self.submissions.insert(0, submission);
        Ok(&self.submissions[0])
    }
}
