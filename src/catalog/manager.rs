//! Quest catalog implementation

use chrono::{DateTime, Local};
use tracing::{debug, info};

use super::{CatalogError, DEFAULT_QUEST_XP, NewQuest};
use crate::domain::{CatalogQuest, CatalogStatus, Quest, QuestId};
use crate::seed;

/// Ordered quest list owned by the admin view (in-memory only, no persistence)
#[derive(Debug, Clone)]
pub struct QuestCatalog {
    /// Newest first
    quests: Vec<CatalogQuest>,
    /// XP given to created quests that do not set their own
    default_xp: u32,
}

impl Default for QuestCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl QuestCatalog {
    pub fn new(quests: Vec<CatalogQuest>) -> Self {
        Self {
            quests,
            default_xp: DEFAULT_QUEST_XP,
        }
    }

    /// Use another default XP for quests created without one
    pub fn with_default_xp(mut self, xp: u32) -> Self {
        self.default_xp = xp;
        self
    }

    /// Catalog populated with the fixed seed quests
    pub fn seeded() -> Self {
        Self::new(seed::catalog_quests())
    }

    /// All quests, newest first
    pub fn quests(&self) -> &[CatalogQuest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Get a quest by ID
    pub fn get(&self, id: &str) -> Option<&CatalogQuest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// Number of quests currently active
    pub fn active_count(&self) -> usize {
        self.quests.iter().filter(|q| q.is_active()).count()
    }

    /// Create a new quest and put it at the head of the catalog
    pub fn create_quest(&mut self, input: NewQuest) -> Result<CatalogQuest, CatalogError> {
        self.create_quest_at(input, Local::now())
    }

    /// Same as [`create_quest`](Self::create_quest) with an explicit clock
    pub fn create_quest_at(
        &mut self,
        input: NewQuest,
        now: DateTime<Local>,
    ) -> Result<CatalogQuest, CatalogError> {
        input.validate()?;

        let quest = Quest {
            id: self.next_id(now),
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            xp: input.xp.unwrap_or(self.default_xp),
            quest_type: input.quest_type,
            category: input.category.trim().to_string(),
            difficulty: input.difficulty,
            created_at: now.date_naive(),
            completions: 0,
            time_estimate: None,
            status: CatalogStatus::Active,
        };

        info!("Created quest {} '{}' ({} XP)", quest.id, quest.title, quest.xp);
        self.quests.insert(0, quest.clone());
        Ok(quest)
    }

    /// Flip a quest between active and inactive.
    ///
    /// Returns the new status, or `None` if no quest has this ID.
    pub fn toggle_status(&mut self, id: &str) -> Option<CatalogStatus> {
        let quest = self.quests.iter_mut().find(|q| q.id == id)?;
        quest.status = quest.status.toggled();
        debug!("Quest {} is now {}", quest.id, quest.status);
        Some(quest.status)
    }

    /// Remove a quest for good.
    ///
    /// Returns the removed quest, or `None` if no quest has this ID.
    pub fn delete_quest(&mut self, id: &str) -> Option<CatalogQuest> {
        let index = self.quests.iter().position(|q| q.id == id)?;
        let quest = self.quests.remove(index);
        info!("Deleted quest {} '{}'", quest.id, quest.title);
        Some(quest)
    }

    /// Millisecond timestamp, bumped until it does not clash with an existing ID
    fn next_id(&self, now: DateTime<Local>) -> QuestId {
        let mut candidate = now.timestamp_millis();
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
