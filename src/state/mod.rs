//! Action handling for the admin and dashboard views
//!
//! Each view owns its state container. An action is applied with
//! `apply(&mut self, action)`, which updates the container in place and may
//! return a [`Notification`] for the user.

mod action;
mod admin;
mod dashboard;
mod notification;
mod script;

pub use action::{AdminAction, DashboardAction, ScriptStep};
pub use admin::AdminState;
pub use dashboard::DashboardState;
pub use notification::{Notification, Variant};
pub use script::{Session, load_script};
