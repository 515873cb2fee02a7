//! Action scripts: a JSON array of actions replayed against fresh state

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::{AdminState, DashboardState, Notification, ScriptStep};
use crate::config::Settings;

/// Load a JSON action script from disk
pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read action script: {}", path.display()))?;

    let steps: Vec<ScriptStep> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse action script: {}", path.display()))?;

    Ok(steps)
}

/// Both view containers side by side. They never read each other's state.
#[derive(Debug, Clone)]
pub struct Session {
    pub admin: AdminState,
    pub dashboard: DashboardState,
}

impl Session {
    pub fn seeded() -> Self {
        Self {
            admin: AdminState::seeded(),
            dashboard: DashboardState::seeded(),
        }
    }

    /// Seeded session whose admin side follows `settings`
    pub fn configured(settings: &Settings) -> Self {
        Self {
            admin: AdminState::configured(settings),
            dashboard: DashboardState::seeded(),
        }
    }

    /// Route one step to the container that owns it
    pub fn apply(&mut self, step: ScriptStep) -> Option<Notification> {
        debug!("Applying {:?}", step);
        match step {
            ScriptStep::Admin(action) => self.admin.apply(action),
            ScriptStep::Dashboard(action) => self.dashboard.apply(action),
        }
    }

    /// Apply steps in order, collecting every notification emitted
    pub fn replay(&mut self, steps: impl IntoIterator<Item = ScriptStep>) -> Vec<Notification> {
        steps.into_iter().filter_map(|step| self.apply(step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_replay_script() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"action": "review_submission", "id": "1", "decision": "approve"}},
                {{"action": "toggle_status", "id": "4"}},
                {{"action": "start_quest", "id": "2"}}
            ]"#
        )
        .unwrap();

        let steps = load_script(file.path()).unwrap();
        let mut session = Session::seeded();
        let notes = session.replay(steps);

        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["Submission Approved!", "Quest Started!"]);
        assert_eq!(session.admin.pending_count(), 1);
        assert_eq!(session.admin.active_quest_count(), 4);
        // Admin actions never reach the dashboard copy
        assert_eq!(session.dashboard.board.available_count(), 3);
    }

    #[test]
    fn test_load_script_reports_path_on_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_script(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse action script"));
    }
}
