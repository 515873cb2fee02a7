//! XP and Level system
//!
//! Levels are a flat XP step apart: level `n` starts at `n * step` XP.

use serde::Serialize;

/// Linear level curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelCurve {
    step: u32,
}

impl LevelCurve {
    /// XP between two consecutive levels unless configured otherwise
    pub const DEFAULT_STEP: u32 = 1000;

    /// Create a curve; a zero step falls back to the default
    pub fn new(step: u32) -> Self {
        Self {
            step: if step == 0 { Self::DEFAULT_STEP } else { step },
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// XP at which `level` starts
    pub fn xp_for_level(&self, level: u32) -> u64 {
        u64::from(level) * u64::from(self.step)
    }
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

/// Progress of a profile towards its next level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub total_xp: u32,
    pub level: u32,
    /// XP at which the current level starts
    pub current_level_xp: u64,
    /// XP at which the next level starts
    pub next_level_xp: u64,
}

impl LevelProgress {
    /// Progress for a stored (level, XP) pair.
    ///
    /// The level is taken as given, not derived from the XP, so the two can
    /// disagree in a stale snapshot.
    pub fn new(total_xp: u32, level: u32, curve: LevelCurve) -> Self {
        Self {
            total_xp,
            level,
            current_level_xp: curve.xp_for_level(level),
            next_level_xp: curve.xp_for_level(level.saturating_add(1)),
        }
    }

    /// Unclamped percentage; negative or above 100 when level and XP disagree
    pub fn raw_percent(&self) -> f64 {
        let span = self.next_level_xp.saturating_sub(self.current_level_xp);
        if span == 0 {
            return 100.0;
        }
        let into_level = f64::from(self.total_xp) - self.current_level_xp as f64;
        into_level / span as f64 * 100.0
    }

    /// Percentage for a progress bar (0.0 - 100.0)
    pub fn percent(&self) -> f64 {
        self.raw_percent().clamp(0.0, 100.0)
    }

    /// XP still missing for the next level
    pub fn xp_to_next(&self) -> u64 {
        self.next_level_xp.saturating_sub(u64::from(self.total_xp))
    }
}
