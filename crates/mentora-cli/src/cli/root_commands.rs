use clap::{Args, Subcommand};

use crate::cli::subcommands::{MenteeCommands, MentorCommands, NotificationCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize a mentora project in the current (or --project) directory.
    Init(InitArgs),
    /// Mentor roster.
    Mentor {
        #[command(subcommand)]
        action: MentorCommands,
    },
    /// Mentees.
    Mentee {
        #[command(subcommand)]
        action: MenteeCommands,
    },
    /// Place every active mentee without an active mentor.
    Assign(AssignArgs),
    /// Per-mentor load, total and by semester.
    Loads,
    /// Notification feed.
    Notification {
        #[command(subcommand)]
        action: NotificationCommands,
    },
}

/// Arguments for `mnt init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing .mentora/config.toml with defaults.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `mnt assign`.
#[derive(Clone, Debug, Args)]
pub struct AssignArgs {
    /// equal, semester, balanced, or manual (defaults to config)
    #[arg(long)]
    pub strategy: Option<String>,
    /// Compute placements without writing them.
    #[arg(long)]
    pub dry_run: bool,
}
