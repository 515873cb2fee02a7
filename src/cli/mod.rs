//! CLI command implementations

pub mod admin;
pub mod dashboard;
pub mod init;
pub mod leaderboard;
pub mod profile;
pub mod replay;

use anyhow::Result;
use serde::Serialize;

use questboard::state::Notification;

/// How command results are printed
#[derive(Debug, Clone, Copy)]
pub struct Output {
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Print non-error notifications emitted by actions
    pub notifications: bool,
}

impl Output {
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a notification (to stderr in JSON mode so stdout stays parseable)
    pub fn notify(&self, notification: Option<&Notification>) {
        let Some(note) = notification.filter(|note| self.shows(note)) else {
            return;
        };
        let marker = if note.is_error() { "✗" } else { "✓" };
        if self.json || note.is_error() {
            eprintln!("{} {}", marker, note);
        } else {
            println!("{} {}", marker, note);
        }
    }

    /// Errors always show; the rest follow the `notifications` setting
    fn shows(&self, note: &Notification) -> bool {
        self.notifications || note.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(notifications: bool) -> Output {
        Output {
            json: false,
            notifications,
        }
    }

    #[test]
    fn test_muted_output_still_shows_errors() {
        let error = Notification::error("Error", "Please fill in all required fields");
        let info = Notification::info("Quest Deleted", "The quest has been removed from the system.");

        let muted = output(false);
        assert!(muted.shows(&error));
        assert!(!muted.shows(&info));

        let loud = output(true);
        assert!(loud.shows(&error));
        assert!(loud.shows(&info));
    }
}
