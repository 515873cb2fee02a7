//! Replay command: apply an action script to fresh state

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use questboard::config::Settings;
use questboard::state::{Notification, Session, load_script};
use questboard::{CatalogQuest, Submission};

use super::Output;

#[derive(Serialize)]
struct ReplayReport<'a> {
    notifications: &'a [Notification],
    active_quests: usize,
    pending_submissions: usize,
    quests: &'a [CatalogQuest],
    submissions: &'a [Submission],
    completed: &'a [String],
}

/// Replay a JSON action script and print the resulting state
pub fn replay_command(out: Output, path: &Path, settings: &Settings) -> Result<()> {
    let steps = load_script(path)?;
    info!("Replaying {} actions from {}", steps.len(), path.display());

    let mut session = Session::configured(settings);
    let notifications = session.replay(steps);

    if out.json {
        return out.print_json(&ReplayReport {
            notifications: &notifications,
            active_quests: session.admin.active_quest_count(),
            pending_submissions: session.admin.pending_count(),
            quests: session.admin.catalog.quests(),
            submissions: session.admin.queue.submissions(),
            completed: session.dashboard.board.completed(),
        });
    }

    for note in &notifications {
        out.notify(Some(note));
    }

    println!(
        "\n{} quests ({} active), {} submissions ({} pending), {} quests completed on the dashboard",
        session.admin.catalog.len(),
        session.admin.active_quest_count(),
        session.admin.queue.submissions().len(),
        session.admin.pending_count(),
        session.dashboard.board.completed().len()
    );

    Ok(())
}
