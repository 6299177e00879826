use clap::Subcommand;

/// Mentor roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MentorCommands {
    /// Add an active mentor.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    /// List mentors.
    List {
        /// Include inactive mentors.
        #[arg(long)]
        all: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a mentor and its current mentees.
    Get { id: String },
    /// Update name or email.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Make a mentor available for new placements.
    Activate { id: String },
    /// Take a mentor out of rotation and redistribute its mentees.
    Deactivate { id: String },
    /// Redistribute a mentor's mentees, then delete it.
    Delete { id: String },
}
