use clap::Subcommand;

/// Notification feed commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NotificationCommands {
    /// List notifications, newest first.
    List {
        #[arg(long)]
        unread: bool,
        /// admin, mentor, or mentee
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Mark a notification as read.
    Read { id: String },
}
