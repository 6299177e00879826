use clap::Subcommand;

/// Mentee commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MenteeCommands {
    /// Add a mentee.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "enrollment")]
        enrollment_no: String,
        #[arg(long)]
        semester: u8,
        /// Place directly on this mentor.
        #[arg(long, conflicts_with = "strategy")]
        mentor: Option<String>,
        /// Place with this strategy right after creation.
        #[arg(long)]
        strategy: Option<String>,
    },
    /// List mentees.
    List {
        #[arg(long)]
        mentor: Option<String>,
        #[arg(long)]
        semester: Option<u8>,
        /// Only mentees without a mentor.
        #[arg(long)]
        unassigned: bool,
        /// Include inactive mentees.
        #[arg(long)]
        all: bool,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a mentee by ID.
    Get { id: String },
    /// Update name, enrollment number, or semester.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "enrollment")]
        enrollment_no: Option<String>,
        #[arg(long)]
        semester: Option<u8>,
    },
    /// Manually place a mentee on a mentor, or clear its mentor.
    Assign {
        id: String,
        #[arg(long, conflicts_with = "unassign", required_unless_present = "unassign")]
        mentor: Option<String>,
        #[arg(long)]
        unassign: bool,
    },
    /// Mark a mentee inactive.
    Deactivate { id: String },
    /// Create mentees from a JSON array file and place them.
    Import {
        file: String,
        /// equal, semester, balanced, or manual (defaults to config)
        #[arg(long)]
        strategy: Option<String>,
    },
}
