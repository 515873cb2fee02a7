use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{AttemptStatus, CatalogStatus};

/// Unique identifier for a quest
pub type QuestId = String;

/// How a quest is completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestType {
    /// Follow / join / share on a social platform
    #[default]
    Social,
    /// Upload a photo, video or document
    Upload,
    /// Answer a quiz
    Quiz,
    /// Visit or share a link
    Link,
}

impl QuestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestType::Social => "social",
            QuestType::Upload => "upload",
            QuestType::Quiz => "quiz",
            QuestType::Link => "link",
        }
    }
}

impl std::fmt::Display for QuestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for QuestType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "social" => Ok(QuestType::Social),
            "upload" => Ok(QuestType::Upload),
            "quiz" => Ok(QuestType::Quiz),
            "link" => Ok(QuestType::Link),
            other => Err(format!("Unknown quest type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// A quest definition.
///
/// The shared fields are the same for every view; `status` carries the
/// lifecycle of the view that owns the copy (see [`CatalogQuest`] and
/// [`BoardQuest`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest<S> {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    /// XP rewarded on approval
    pub xp: u32,
    #[serde(rename = "type")]
    pub quest_type: QuestType,
    pub category: String,
    pub difficulty: Difficulty,
    pub created_at: NaiveDate,
    /// Informational counter, never incremented by user actions
    pub completions: u32,
    /// Rough effort hint shown on the dashboard (e.g. "5 min")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    pub status: S,
}

/// Quest as managed by admins
pub type CatalogQuest = Quest<CatalogStatus>;

/// Quest as attempted by a user on the dashboard
pub type BoardQuest = Quest<AttemptStatus>;

impl<S> Quest<S> {
    /// Re-project this quest into another view's lifecycle
    pub fn with_status<T>(self, status: T) -> Quest<T> {
        Quest {
            id: self.id,
            title: self.title,
            description: self.description,
            xp: self.xp,
            quest_type: self.quest_type,
            category: self.category,
            difficulty: self.difficulty,
            created_at: self.created_at,
            completions: self.completions,
            time_estimate: self.time_estimate,
            status,
        }
    }
}

impl CatalogQuest {
    pub fn is_active(&self) -> bool {
        self.status == CatalogStatus::Active
    }
}
