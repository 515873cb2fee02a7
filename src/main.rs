use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questboard::catalog::NewQuest;
use questboard::config::Config;
use questboard::stats::Period;
use questboard::{CatalogStatus, Difficulty, QuestType, ReviewAction, SubmissionStatus};

mod cli;

use cli::Output;

#[derive(Parser)]
#[command(name = "questboard")]
#[command(about = "Questboard - quests, XP, submission review and leaderboards")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.questboard/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the admin quest catalog
    Quests {
        /// Only show quests with this status (active, inactive)
        #[arg(long)]
        status: Option<CatalogStatus>,
    },

    /// Create a new quest
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        /// XP reward (defaults to settings.default_quest_xp)
        #[arg(long)]
        xp: Option<u32>,

        /// social, upload, quiz or link
        #[arg(long = "type", default_value = "social")]
        quest_type: QuestType,

        /// easy, medium or hard
        #[arg(long, default_value = "easy")]
        difficulty: Difficulty,
    },

    /// Toggle a quest between active and inactive
    Toggle { id: String },

    /// Delete a quest
    Delete { id: String },

    /// List submissions
    Submissions {
        /// Only show submissions with this status (pending, approved, rejected)
        #[arg(long)]
        status: Option<SubmissionStatus>,
    },

    /// Approve or reject a submission
    Review {
        id: String,

        /// approve or reject
        decision: ReviewAction,
    },

    /// Submit proof of a completed quest for review
    Submit {
        quest_id: String,

        #[arg(long)]
        user_id: String,

        #[arg(long)]
        user_name: String,

        /// Proof text (handle, link, score...)
        #[arg(long)]
        data: String,
    },

    /// Show the user dashboard
    Board,

    /// Start a quest on the dashboard
    Start { id: String },

    /// Mark a quest completed on the dashboard
    Complete { id: String },

    /// Show the leaderboard
    Leaderboard {
        /// Rank by weekly XP instead of total XP
        #[arg(long)]
        weekly: bool,
    },

    /// Show the user profile
    Profile,

    /// Apply a JSON action script to fresh state
    Replay { script: PathBuf },

    /// Initialize a new config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Init must work before any config exists
    if let Some(Commands::Init { force }) = &cli.command {
        return cli::init::init_command(cli.config.as_deref(), *force);
    }

    let config = Config::load(cli.config.as_deref())?;
    let out = Output {
        json: cli.json,
        notifications: config.settings.notifications,
    };

    match cli.command {
        Some(Commands::Quests { status }) => {
            cli::admin::quests_command(out, status)?;
        }
        Some(Commands::Create {
            title,
            description,
            category,
            xp,
            quest_type,
            difficulty,
        }) => {
            let mut input = NewQuest::new(title, description, category)
                .with_type(quest_type)
                .with_difficulty(difficulty);
            if let Some(xp) = xp {
                input = input.with_xp(xp);
            }
            cli::admin::create_command(out, input, &config.settings)?;
        }
        Some(Commands::Toggle { id }) => {
            cli::admin::toggle_command(out, &id)?;
        }
        Some(Commands::Delete { id }) => {
            cli::admin::delete_command(out, &id)?;
        }
        Some(Commands::Submissions { status }) => {
            cli::admin::submissions_command(out, status)?;
        }
        Some(Commands::Review { id, decision }) => {
            cli::admin::review_command(out, &id, decision)?;
        }
        Some(Commands::Submit {
            quest_id,
            user_id,
            user_name,
            data,
        }) => {
            cli::admin::submit_command(out, &quest_id, &user_id, &user_name, &data)?;
        }
        Some(Commands::Start { id }) => {
            cli::dashboard::start_command(out, &id)?;
        }
        Some(Commands::Complete { id }) => {
            cli::dashboard::complete_command(out, &id)?;
        }
        Some(Commands::Leaderboard { weekly }) => {
            let period = if weekly { Period::Weekly } else { Period::AllTime };
            cli::leaderboard::leaderboard_command(out, period)?;
        }
        Some(Commands::Profile) => {
            cli::profile::profile_command(out, &config.settings)?;
        }
        Some(Commands::Replay { script }) => {
            cli::replay::replay_command(out, &script, &config.settings)?;
        }
        Some(Commands::Board) | None => {
            // Default: show the dashboard
            cli::dashboard::board_command(out)?;
        }
        Some(Commands::Init { .. }) => {}
    }

    Ok(())
}
