//! Core domain types for questboard
//!
//! One schema per entity. Views that need a different lifecycle for the same
//! quest use the `status` type parameter of [`Quest`] instead of redefining it.

mod quest;
mod status;
mod submission;
mod user;

pub use quest::{BoardQuest, CatalogQuest, Difficulty, Quest, QuestId, QuestType};
pub use status::{AttemptStatus, CatalogStatus, ReviewAction, SubmissionStatus};
pub use submission::Submission;
pub use user::{Achievement, ActivityEntry, LeaderboardUser, ProfileStats, UserStats};
