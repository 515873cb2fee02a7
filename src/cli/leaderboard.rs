//! Leaderboard command

use anyhow::Result;

use questboard::stats::{Leaderboard, Period, podium, rank_medal};

use super::Output;

/// Show the all-time or weekly ranking
pub fn leaderboard_command(out: Output, period: Period) -> Result<()> {
    let ranked = Leaderboard::seeded().view(period);

    if out.json {
        return out.print_json(&ranked);
    }

    println!("Hall of Fame:");
    for user in podium(&ranked) {
        println!(
            "  {} {} - {} {} XP",
            rank_medal(user.rank).unwrap_or("-"),
            user.name,
            period.xp_of(user),
            period.label()
        );
    }

    println!("\n{} ranking:\n", period.label());
    for user in &ranked {
        println!(
            "  #{:<2} {:<18} {:>6} XP  Level {:<3} {} quests  [{}]",
            user.rank,
            user.name,
            period.xp_of(user),
            user.level,
            user.completed_quests,
            user.badges.join(", ")
        );
    }

    Ok(())
}
