//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::catalog::DEFAULT_QUEST_XP;
use crate::stats::LevelCurve;

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// XP offered by a new quest created without its own XP
    /// (`--xp` or a script's `xp` field)
    #[serde(default = "default_quest_xp")]
    pub default_quest_xp: u32,

    /// XP between two consecutive profile levels
    #[serde(default = "default_level_xp_step")]
    pub level_xp_step: u32,

    /// Print notifications emitted by actions. Errors are always printed.
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_quest_xp() -> u32 {
    DEFAULT_QUEST_XP
}

fn default_level_xp_step() -> u32 {
    LevelCurve::DEFAULT_STEP
}

fn default_notifications() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_quest_xp: default_quest_xp(),
            level_xp_step: default_level_xp_step(),
            notifications: default_notifications(),
        }
    }
}

impl Settings {
    pub fn level_curve(&self) -> LevelCurve {
        LevelCurve::new(self.level_xp_step)
    }
}
