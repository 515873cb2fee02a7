use serde::{Deserialize, Serialize};

use crate::catalog::NewQuest;
use crate::domain::ReviewAction;

/// Everything an admin can do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AdminAction {
    CreateQuest(NewQuest),
    ToggleStatus {
        id: String,
    },
    DeleteQuest {
        id: String,
    },
    ReviewSubmission {
        id: String,
        decision: ReviewAction,
    },
    Submit {
        quest_id: String,
        user_id: String,
        user_name: String,
        submission_data: String,
    },
}

/// Everything a user can do on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DashboardAction {
    StartQuest { id: String },
    CompleteQuest { id: String },
}

/// One step of an action script; routed to the container that owns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Admin(AdminAction),
    Dashboard(DashboardAction),
}
