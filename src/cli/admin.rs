//! Admin commands: quest catalog and submission review

use anyhow::Result;
use tracing::warn;

use questboard::catalog::NewQuest;
use questboard::config::Settings;
use questboard::state::{AdminAction, AdminState};
use questboard::{CatalogQuest, CatalogStatus, ReviewAction, Submission, SubmissionStatus};

use super::Output;

fn print_quest(quest: &CatalogQuest) {
    println!(
        "  #{} [{}] {} - {} XP ({}, {}, {})",
        quest.id,
        quest.status,
        quest.title,
        quest.xp,
        quest.quest_type,
        quest.difficulty.label(),
        quest.category
    );
    println!("    {}", quest.description);
    println!(
        "    Created {} - {} completions",
        quest.created_at, quest.completions
    );
}

fn print_submission(submission: &Submission) {
    println!(
        "  #{} [{}] {} - {} ({})",
        submission.id,
        submission.status,
        submission.quest_title,
        submission.user_name,
        submission.submitted_label()
    );
    println!("    {}", submission.submission_data);
    if let Some(xp) = submission.xp_awarded {
        println!("    XP awarded: {}", xp);
    }
}

fn print_summary(state: &AdminState) {
    println!(
        "{} active quests, {} pending submissions",
        state.active_quest_count(),
        state.pending_count()
    );
}

/// List the quest catalog
pub fn quests_command(out: Output, filter: Option<CatalogStatus>) -> Result<()> {
    let state = AdminState::seeded();
    let quests: Vec<&CatalogQuest> = state
        .catalog
        .quests()
        .iter()
        .filter(|q| filter.is_none_or(|status| q.status == status))
        .collect();

    if out.json {
        return out.print_json(&quests);
    }

    if quests.is_empty() {
        println!("No quests found.");
        return Ok(());
    }

    println!("Quests ({}):\n", quests.len());
    for quest in quests {
        print_quest(quest);
        println!();
    }
    print_summary(&state);

    Ok(())
}

/// Create a quest and show it at the head of the catalog
pub fn create_command(out: Output, input: NewQuest, settings: &Settings) -> Result<()> {
    let mut state = AdminState::configured(settings);
    let before = state.catalog.len();

    let note = state.apply(AdminAction::CreateQuest(input));
    out.notify(note.as_ref());

    if state.catalog.len() == before {
        // Validation failed, nothing to show
        return Ok(());
    }

    let created = &state.catalog.quests()[0];
    if out.json {
        return out.print_json(created);
    }
    print_quest(created);
    print_summary(&state);

    Ok(())
}

/// Flip a quest between active and inactive
pub fn toggle_command(out: Output, id: &str) -> Result<()> {
    let mut state = AdminState::seeded();
    if state.catalog.get(id).is_none() {
        warn!("No quest with id {}", id);
    }

    let note = state.apply(AdminAction::ToggleStatus { id: id.to_string() });
    out.notify(note.as_ref());

    match state.catalog.get(id) {
        Some(quest) if out.json => out.print_json(quest)?,
        Some(quest) => {
            print_quest(quest);
            print_summary(&state);
        }
        None if !out.json => println!("Quest {} not found.", id),
        None => {}
    }

    Ok(())
}

/// Delete a quest from the catalog
pub fn delete_command(out: Output, id: &str) -> Result<()> {
    let mut state = AdminState::seeded();
    if state.catalog.get(id).is_none() {
        warn!("No quest with id {}", id);
    }

    let note = state.apply(AdminAction::DeleteQuest { id: id.to_string() });
    out.notify(note.as_ref());

    if out.json {
        return out.print_json(state.catalog.quests());
    }
    println!("{} quests remain.", state.catalog.len());
    print_summary(&state);

    Ok(())
}

/// List submissions, optionally by status
pub fn submissions_command(out: Output, filter: Option<SubmissionStatus>) -> Result<()> {
    let state = AdminState::seeded();
    let submissions: Vec<&Submission> = match filter {
        Some(status) => state.queue.with_status(status).collect(),
        None => state.queue.submissions().iter().collect(),
    };

    if out.json {
        return out.print_json(&submissions);
    }

    if submissions.is_empty() {
        println!("No submissions found.");
        return Ok(());
    }

    println!("Submissions ({}):\n", submissions.len());
    for submission in submissions {
        print_submission(submission);
        println!();
    }
    print_summary(&state);

    Ok(())
}

/// Approve or reject a submission
pub fn review_command(out: Output, id: &str, decision: ReviewAction) -> Result<()> {
    let mut state = AdminState::seeded();
    if state.queue.get(id).is_none() {
        warn!("No submission with id {}", id);
    }

    let note = state.apply(AdminAction::ReviewSubmission {
        id: id.to_string(),
        decision,
    });
    out.notify(note.as_ref());

    match state.queue.get(id) {
        Some(submission) if out.json => out.print_json(submission)?,
        Some(submission) => {
            print_submission(submission);
            print_summary(&state);
        }
        None if !out.json => println!("Submission {} not found.", id),
        None => {}
    }

    Ok(())
}

/// Add a pending submission for a quest
pub fn submit_command(
    out: Output,
    quest_id: &str,
    user_id: &str,
    user_name: &str,
    data: &str,
) -> Result<()> {
    let mut state = AdminState::seeded();
    let before = state.queue.submissions().len();

    let note = state.apply(AdminAction::Submit {
        quest_id: quest_id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        submission_data: data.to_string(),
    });
    out.notify(note.as_ref());

    if state.queue.submissions().len() == before {
        return Ok(());
    }

    let created = &state.queue.submissions()[0];
    if out.json {
        return out.print_json(created);
    }
    print_submission(created);
    print_summary(&state);

    Ok(())
}
