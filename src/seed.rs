//! Fixed seed data
//!
//! Every container starts from these values on each run. The snapshots are
//! independent of each other and are not meant to agree.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    Achievement, ActivityEntry, AttemptStatus, BoardQuest, CatalogQuest, CatalogStatus,
    Difficulty, LeaderboardUser, ProfileStats, Quest, QuestType, Submission, SubmissionStatus,
    UserStats,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hour, min, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn quest<S>(
    id: &str,
    title: &str,
    description: &str,
    xp: u32,
    quest_type: QuestType,
    category: &str,
    difficulty: Difficulty,
    created_at: NaiveDate,
    completions: u32,
    status: S,
) -> Quest<S> {
    Quest {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        xp,
        quest_type,
        category: category.to_string(),
        difficulty,
        created_at,
        completions,
        time_estimate: None,
        status,
    }
}

/// Admin catalog, newest first
pub fn catalog_quests() -> Vec<CatalogQuest> {
    vec![
        quest(
            "1",
            "Follow us on Twitter",
            "Follow our official Twitter account and help us grow our community",
            100,
            QuestType::Social,
            "Social Media",
            Difficulty::Easy,
            date(2024, 1, 10),
            87,
            CatalogStatus::Active,
        ),
        quest(
            "2",
            "Share your story",
            "Upload a photo or video sharing how our platform helped you",
            250,
            QuestType::Upload,
            "Content Creation",
            Difficulty::Medium,
            date(2024, 1, 8),
            34,
            CatalogStatus::Active,
        ),
        quest(
            "3",
            "Community Quiz",
            "Test your knowledge about our platform and community guidelines",
            150,
            QuestType::Quiz,
            "Knowledge",
            Difficulty::Easy,
            date(2024, 1, 5),
            156,
            CatalogStatus::Active,
        ),
        quest(
            "4",
            "Join Discord Server",
            "Join our Discord community and introduce yourself",
            200,
            QuestType::Social,
            "Social Media",
            Difficulty::Easy,
            date(2024, 1, 3),
            67,
            CatalogStatus::Inactive,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn submission(
    id: &str,
    quest_id: &str,
    quest_title: &str,
    user: (&str, &str),
    submission_data: &str,
    status: SubmissionStatus,
    submitted_at: NaiveDateTime,
    xp_awarded: Option<u32>,
) -> Submission {
    Submission {
        id: id.to_string(),
        quest_id: quest_id.to_string(),
        quest_title: quest_title.to_string(),
        user_id: user.0.to_string(),
        user_name: user.1.to_string(),
        submission_data: submission_data.to_string(),
        status,
        submitted_at,
        xp_awarded,
    }
}

/// Admin review queue
pub fn submissions() -> Vec<Submission> {
    vec![
        submission(
            "1",
            "1",
            "Follow us on Twitter",
            ("user1", "Sarah Chen"),
            "Twitter handle: @sarahc_dev - Followed and retweeted pinned post",
            SubmissionStatus::Pending,
            datetime(2024, 1, 15, 14, 30),
            None,
        ),
        submission(
            "2",
            "2",
            "Share your story",
            ("user2", "Marcus Rodriguez"),
            "Uploaded success story video: https://example.com/video123",
            SubmissionStatus::Pending,
            datetime(2024, 1, 15, 12, 15),
            None,
        ),
        submission(
            "3",
            "1",
            "Follow us on Twitter",
            ("user3", "Emma Thompson"),
            "Twitter handle: @emmathompson - Followed account",
            SubmissionStatus::Approved,
            datetime(2024, 1, 14, 16, 45),
            Some(100),
        ),
        submission(
            "4",
            "3",
            "Community Quiz",
            ("user4", "David Kim"),
            "Quiz completed with score: 9/10 questions correct",
            SubmissionStatus::Rejected,
            datetime(2024, 1, 14, 10, 20),
            None,
        ),
    ]
}

/// Dashboard's own quest list
pub fn board_quests() -> Vec<BoardQuest> {
    let listed = date(2024, 1, 1);
    let rows = [
        (
            "1",
            "Follow us on Twitter",
            "Follow our official Twitter account and help us grow our community",
            100,
            Difficulty::Easy,
            "Social",
            "2 min",
            QuestType::Social,
        ),
        (
            "2",
            "Join Discord Community",
            "Join our Discord server and introduce yourself in #general",
            150,
            Difficulty::Easy,
            "Social",
            "5 min",
            QuestType::Social,
        ),
        (
            "3",
            "Share your story",
            "Upload a photo or video sharing how our platform helped you",
            250,
            Difficulty::Medium,
            "Content",
            "10 min",
            QuestType::Upload,
        ),
        (
            "4",
            "Community Quiz",
            "Test your knowledge about our platform and community guidelines",
            200,
            Difficulty::Medium,
            "Knowledge",
            "8 min",
            QuestType::Quiz,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, title, description, xp, difficulty, category, estimate, quest_type)| {
                let mut q = quest(
                    id,
                    title,
                    description,
                    xp,
                    quest_type,
                    category,
                    difficulty,
                    listed,
                    0,
                    AttemptStatus::Available,
                );
                q.time_estimate = Some(estimate.to_string());
                q
            },
        )
        .collect()
}

pub fn dashboard_stats() -> UserStats {
    UserStats {
        total_xp: 2450,
        rank: 7,
        weekly_xp: 320,
        completed_quests: 12,
        badges: 4,
    }
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        ("Completed \"Follow us on Twitter\"", 100, "2 hours ago"),
        ("Earned \"Early Adopter\" badge", 0, "1 day ago"),
        ("Completed \"Join Discord\"", 150, "2 days ago"),
        ("Completed \"Community Quiz\"", 200, "3 days ago"),
    ]
    .into_iter()
    .map(|(action, xp, time)| ActivityEntry {
        action: action.to_string(),
        xp,
        time: time.to_string(),
    })
    .collect()
}

/// All-time leaderboard, already in rank order
pub fn leaderboard_users() -> Vec<LeaderboardUser> {
    let rows: [(&str, &str, u32, u32, u32, u32, &[&str]); 8] = [
        ("1", "Sarah Chen", 8750, 28, 450, 67, &["Legend", "Quest Master", "Community Leader"]),
        ("2", "Marcus Rodriguez", 7200, 24, 380, 54, &["Elite", "Social Butterfly", "Mentor"]),
        ("3", "Alex Johnson", 6450, 21, 320, 43, &["Rising Star", "Dedicated", "Helper"]),
        ("4", "Emma Thompson", 5800, 19, 290, 39, &["Consistent", "Team Player"]),
        ("5", "David Kim", 5200, 17, 275, 35, &["Newcomer", "Fast Learner"]),
        ("6", "Lisa Wang", 4750, 16, 250, 32, &["Active", "Supporter"]),
        ("7", "James Wilson", 4200, 14, 220, 28, &["Contributor"]),
        ("8", "Maria Garcia", 3900, 13, 200, 26, &["Engaged"]),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(index, (id, name, xp, level, weekly_xp, completed_quests, badges))| LeaderboardUser {
                id: id.to_string(),
                name: name.to_string(),
                xp,
                level,
                rank: index as u32 + 1,
                weekly_xp,
                completed_quests,
                badges: strings(badges),
            },
        )
        .collect()
}

pub fn profile_stats() -> ProfileStats {
    ProfileStats {
        total_xp: 6450,
        level: 21,
        rank: 3,
        completed_quests: 43,
        weekly_xp: 320,
        monthly_xp: 1250,
        streak: 7,
        badges: strings(&[
            "Rising Star",
            "Quest Master",
            "Social Butterfly",
            "Dedicated",
            "Helper",
            "Early Bird",
        ]),
    }
}

pub fn recent_achievements() -> Vec<Achievement> {
    [
        (
            "1",
            "Community Quiz Champion",
            "Completed the weekly community quiz with a perfect score",
            150,
            date(2024, 1, 15),
            QuestType::Quiz,
        ),
        (
            "2",
            "Social Media Superstar",
            "Successfully shared content on Twitter and gained 50+ engagements",
            250,
            date(2024, 1, 14),
            QuestType::Social,
        ),
        (
            "3",
            "Content Creator",
            "Uploaded high-quality content that received community approval",
            300,
            date(2024, 1, 12),
            QuestType::Upload,
        ),
        (
            "4",
            "Referral Master",
            "Successfully referred 3 new members to the community",
            500,
            date(2024, 1, 10),
            QuestType::Link,
        ),
        (
            "5",
            "Discord Community Leader",
            "Actively participated in Discord discussions for 5 consecutive days",
            200,
            date(2024, 1, 8),
            QuestType::Social,
        ),
    ]
    .into_iter()
    .map(|(id, title, description, xp_awarded, date, quest_type)| Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        xp_awarded,
        date,
        quest_type,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_seed_is_rank_ordered() {
        let users = leaderboard_users();
        assert_eq!(users.len(), 8);
        for (index, user) in users.iter().enumerate() {
            assert_eq!(user.rank as usize, index + 1);
        }
        assert!(users.windows(2).all(|w| w[0].xp >= w[1].xp));
    }

    #[test]
    fn test_seed_submissions_reference_catalog() {
        let quests = catalog_quests();
        for s in submissions() {
            assert!(quests.iter().any(|q| q.id == s.quest_id));
            assert_eq!(s.xp_awarded.is_some(), s.status == SubmissionStatus::Approved);
        }
    }

    #[test]
    fn test_board_quests_start_available() {
        let quests = board_quests();
        assert_eq!(quests.len(), 4);
        assert!(quests.iter().all(|q| q.status == AttemptStatus::Available));
        assert!(quests.iter().all(|q| q.time_estimate.is_some()));
    }
}
