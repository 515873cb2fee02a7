//! Questboard - quests, XP and leaderboards
//!
//! The domain core of a gamification dashboard. Admins curate a quest catalog
//! and review user submissions; users start and complete quests on their own
//! dashboard; a leaderboard ranks users by total or weekly XP.
//!
//! ## State containers
//!
//! Each view owns an independent, in-memory container seeded from fixed data:
//!
//! 1. **Admin** ([`state::AdminState`]): the [`catalog::QuestCatalog`] and the
//!    [`review::SubmissionQueue`]. Approvals look XP up in the catalog.
//! 2. **Dashboard** ([`state::DashboardState`]): the user's own
//!    [`board::QuestBoard`] plus read-only stats.
//! 3. **Leaderboard / profile** ([`stats`]): read-only snapshots.
//!
//! Nothing is persisted; every run starts from [`seed`].

pub mod board;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod review;
pub mod seed;
pub mod state;
pub mod stats;

pub use domain::*;
