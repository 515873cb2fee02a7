//! Dashboard commands: the user's own quest board

use anyhow::Result;
use serde::Serialize;
use tracing::warn;

use questboard::board::rank_progress;
use questboard::state::{DashboardAction, DashboardState};
use questboard::{ActivityEntry, BoardQuest, UserStats};

use super::Output;

#[derive(Serialize)]
struct BoardView<'a> {
    stats: &'a UserStats,
    rank_progress: f32,
    quests: &'a [BoardQuest],
    completed: &'a [String],
    activity: &'a [ActivityEntry],
}

fn print_board(out: Output, state: &DashboardState) -> Result<()> {
    let progress = rank_progress(state.stats.rank);

    if out.json {
        return out.print_json(&BoardView {
            stats: &state.stats,
            rank_progress: progress,
            quests: state.board.quests(),
            completed: state.board.completed(),
            activity: &state.activity,
        });
    }

    let stats = &state.stats;
    println!(
        "Total XP: {}  Rank: #{}  Weekly XP: {}  Quests done: {}  Badges: {}",
        stats.total_xp, stats.rank, stats.weekly_xp, stats.completed_quests, stats.badges
    );
    println!("Rank progress to top 5: {}%\n", progress.round());

    println!("Quests ({} available):\n", state.board.available_count());
    for quest in state.board.quests() {
        let status = if state.board.is_completed(&quest.id) {
            "completed".to_string()
        } else {
            quest.status.to_string()
        };
        println!(
            "  #{} [{}] {} - {} XP ({}, {}, {})",
            quest.id,
            status,
            quest.title,
            quest.xp,
            quest.difficulty.label(),
            quest.category,
            quest.time_estimate.as_deref().unwrap_or("-")
        );
        println!("    {}", quest.description);
    }

    println!("\nRecent activity:");
    for entry in &state.activity {
        if entry.xp > 0 {
            println!("  {} (+{} XP) - {}", entry.action, entry.xp, entry.time);
        } else {
            println!("  {} - {}", entry.action, entry.time);
        }
    }

    Ok(())
}

/// Show the dashboard
pub fn board_command(out: Output) -> Result<()> {
    print_board(out, &DashboardState::seeded())
}

/// Start a quest (available -> pending)
pub fn start_command(out: Output, id: &str) -> Result<()> {
    let mut state = DashboardState::seeded();
    let note = state.apply(DashboardAction::StartQuest { id: id.to_string() });
    if note.is_none() {
        warn!("Quest {} is unknown or already started", id);
    }
    out.notify(note.as_ref());
    print_board(out, &state)
}

/// Flag a quest completed
pub fn complete_command(out: Output, id: &str) -> Result<()> {
    let mut state = DashboardState::seeded();
    if state.board.get(id).is_none() {
        warn!("Quest {} is not on the board", id);
    }
    let note = state.apply(DashboardAction::CompleteQuest { id: id.to_string() });
    out.notify(note.as_ref());
    print_board(out, &state)
}
