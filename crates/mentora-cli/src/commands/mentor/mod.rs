mod add;
mod get;
mod list;
mod remove;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MentorCommands;
use crate::context::AppContext;

/// Handle `mnt mentor`.
pub async fn handle(
    action: &MentorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MentorCommands::Add { name, email } => add::run(name, email.as_deref(), ctx, flags).await,
        MentorCommands::List { all, limit } => list::run(*all, *limit, ctx, flags).await,
        MentorCommands::Get { id } => get::run(id, ctx, flags).await,
        MentorCommands::Update { id, name, email } => {
            update::run(id, name.as_deref(), email.as_deref(), ctx, flags).await
        }
        MentorCommands::Activate { id } => remove::activate(id, ctx, flags).await,
        MentorCommands::Deactivate { id } => remove::deactivate(id, ctx, flags).await,
        MentorCommands::Delete { id } => remove::delete(id, ctx, flags).await,
    }
}
