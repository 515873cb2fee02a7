//! Admin quest catalog
//!
//! Create, toggle and delete quests. Lookups by id return `Option` so callers
//! decide whether an unknown id is an error or a no-op.

mod manager;

pub use manager::QuestCatalog;

use serde::{Deserialize, Serialize};

use crate::domain::{Difficulty, QuestType};

/// XP offered by a new quest when none is given
pub const DEFAULT_QUEST_XP: u32 = 100;

/// Why a quest could not be created
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Quest XP must be greater than zero")]
    InvalidXp,
}

/// Fields supplied by the admin "create quest" form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuest {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Left unset, the catalog's default XP applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<u32>,
    #[serde(default, rename = "type")]
    pub quest_type: QuestType,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl NewQuest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            xp: None,
            quest_type: QuestType::default(),
            difficulty: Difficulty::default(),
        }
    }

    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = Some(xp);
        self
    }

    pub fn with_type(mut self, quest_type: QuestType) -> Self {
        self.quest_type = quest_type;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check required fields (non-empty after trim) and the XP reward
    pub fn validate(&self) -> Result<(), CatalogError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("category", &self.category),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(CatalogError::MissingField(*name));
        }
        if self.xp == Some(0) {
            return Err(CatalogError::InvalidXp);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_quest_defaults() {
        let input = NewQuest::new("Test", "Do X", "Misc");
        assert_eq!(input.xp, None);
        assert_eq!(input.quest_type, QuestType::Social);
        assert_eq!(input.difficulty, Difficulty::Easy);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        assert_eq!(
            NewQuest::new("  ", "Do X", "Misc").validate(),
            Err(CatalogError::MissingField("title"))
        );
        assert_eq!(
            NewQuest::new("Test", "", "").validate(),
            Err(CatalogError::MissingField("description"))
        );
        assert_eq!(
            NewQuest::new("Test", "Do X", "\t").validate(),
            Err(CatalogError::MissingField("category"))
        );
    }

    #[test]
    fn test_validate_rejects_zero_xp() {
        let input = NewQuest::new("Test", "Do X", "Misc").with_xp(0);
        assert_eq!(input.validate(), Err(CatalogError::InvalidXp));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let input: NewQuest =
            serde_json::from_str(r#"{"title":"T","description":"D","category":"C"}"#).unwrap();
        assert_eq!(input.xp, None);
        assert_eq!(input.quest_type, QuestType::Social);

        let input: NewQuest = serde_json::from_str(
            r#"{"title":"T","description":"D","category":"C","xp":50,"type":"quiz","difficulty":"hard"}"#,
        )
        .unwrap();
        assert_eq!(input.xp, Some(50));
        assert_eq!(input.quest_type, QuestType::Quiz);
        assert_eq!(input.difficulty, Difficulty::Hard);
    }
}
