//! Integration tests for leaderboard ranking and profile progress

use questboard::seed;
use questboard::stats::{Leaderboard, LevelCurve, LevelProgress, Period, podium};

#[test]
fn test_weekly_ranks_are_dense_and_sorted() {
    let board = Leaderboard::seeded();
    let weekly = board.view(Period::Weekly);

    assert_eq!(weekly.len(), board.len());
    assert!(weekly.windows(2).all(|w| w[0].weekly_xp >= w[1].weekly_xp));
    for (index, user) in weekly.iter().enumerate() {
        assert_eq!(user.rank as usize, index + 1);
    }
}

#[test]
fn test_weekly_podium_differs_when_weekly_order_differs() {
    let mut users = seed::leaderboard_users();
    // Last place has the best week
    users[7].weekly_xp = 999;
    let board = Leaderboard::new(users);

    let weekly = board.rank_by_weekly();
    let top: Vec<&str> = podium(&weekly).iter().map(|u| u.name.as_str()).collect();
    assert_eq!(top, vec!["Maria Garcia", "Sarah Chen", "Marcus Rodriguez"]);

    let all_time = board.rank_by_total();
    assert_eq!(all_time[7].name, "Maria Garcia");
    assert_eq!(all_time[7].rank, 8);
}

#[test]
fn test_profile_progress_from_seed() {
    let profile = seed::profile_stats();
    let progress = LevelProgress::new(profile.total_xp, profile.level, LevelCurve::default());

    assert_eq!(progress.current_level_xp, 21_000);
    assert_eq!(progress.next_level_xp, 22_000);
    assert_eq!(progress.percent(), 0.0);
}
