//! Profile command

use anyhow::Result;
use serde::Serialize;

use questboard::config::Settings;
use questboard::seed;
use questboard::stats::LevelProgress;
use questboard::{Achievement, ProfileStats};

use super::Output;

#[derive(Serialize)]
struct ProfileView {
    stats: ProfileStats,
    progress: LevelProgress,
    progress_percent: f64,
    achievements: Vec<Achievement>,
}

/// Show profile stats, level progress and recent achievements
pub fn profile_command(out: Output, settings: &Settings) -> Result<()> {
    let stats = seed::profile_stats();
    let progress = LevelProgress::new(stats.total_xp, stats.level, settings.level_curve());
    let achievements = seed::recent_achievements();

    if out.json {
        return out.print_json(&ProfileView {
            progress_percent: progress.percent(),
            stats,
            progress,
            achievements,
        });
    }

    println!("Level {} - Rank #{}", stats.level, stats.rank);
    println!(
        "Progress to level {}: {:.0}% ({} XP to go)",
        stats.level + 1,
        progress.percent(),
        progress.xp_to_next()
    );
    println!(
        "Total XP: {}  Quests: {}  Weekly XP: {}  Monthly XP: {}  Streak: {} days",
        stats.total_xp, stats.completed_quests, stats.weekly_xp, stats.monthly_xp, stats.streak
    );
    println!("Badges: {}", stats.badges.join(", "));

    println!("\nRecent achievements:");
    for achievement in &achievements {
        println!(
            "  {} [{}] {} (+{} XP)",
            achievement.date, achievement.quest_type, achievement.title, achievement.xp_awarded
        );
        println!("    {}", achievement.description);
    }

    Ok(())
}
