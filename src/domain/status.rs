use serde::{Deserialize, Serialize};

/// Lifecycle of a quest in the admin catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogStatus {
    /// Quest is visible to users and accepts submissions
    #[default]
    Active,
    /// Quest is hidden from users
    Inactive,
}

impl CatalogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogStatus::Active => "active",
            CatalogStatus::Inactive => "inactive",
        }
    }

    /// The opposite status (active <-> inactive)
    pub fn toggled(self) -> Self {
        match self {
            CatalogStatus::Active => CatalogStatus::Inactive,
            CatalogStatus::Inactive => CatalogStatus::Active,
        }
    }
}

impl std::fmt::Display for CatalogStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CatalogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(CatalogStatus::Active),
            "inactive" => Ok(CatalogStatus::Inactive),
            other => Err(format!("Unknown quest status: {}", other)),
        }
    }
}

/// Lifecycle of a quest as seen by a user on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    /// Not started yet
    #[default]
    Available,
    /// Started, waiting on the user (or a reviewer)
    Pending,
    /// Flagged completed locally
    Completed,
}

impl AttemptStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptStatus::Available => "available",
            AttemptStatus::Pending => "pending",
            AttemptStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Review status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Waiting for an admin decision
    #[default]
    Pending,
    /// Accepted, XP awarded
    Approved,
    /// Declined, no XP
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            other => Err(format!("Unknown submission status: {}", other)),
        }
    }
}

/// Admin decision on a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    /// Status a submission ends up in after this decision
    pub fn resulting_status(&self) -> SubmissionStatus {
        match self {
            ReviewAction::Approve => SubmissionStatus::Approved,
            ReviewAction::Reject => SubmissionStatus::Rejected,
        }
    }
}

impl std::str::FromStr for ReviewAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "approve" => Ok(ReviewAction::Approve),
            "reject" => Ok(ReviewAction::Reject),
            other => Err(format!("Unknown review action: {} (expected approve or reject)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        for status in [CatalogStatus::Active, CatalogStatus::Inactive] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Active".parse::<CatalogStatus>(), Ok(CatalogStatus::Active));
        assert_eq!("REJECTED".parse::<SubmissionStatus>(), Ok(SubmissionStatus::Rejected));
        assert_eq!("approve".parse::<ReviewAction>(), Ok(ReviewAction::Approve));
        assert!("archived".parse::<CatalogStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&AttemptStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
        let status: SubmissionStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, SubmissionStatus::Approved);
    }
}
