mod add;
mod assign;
mod get;
mod import;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MenteeCommands;
use crate::context::AppContext;

/// Handle `mnt mentee`.
pub async fn handle(
    action: &MenteeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MenteeCommands::Add {
            name,
            enrollment_no,
            semester,
            mentor,
            strategy,
        } => {
            add::run(
                name,
                enrollment_no,
                *semester,
                mentor.as_deref(),
                strategy.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        MenteeCommands::List {
            mentor,
            semester,
            unassigned,
            all,
            limit,
        } => {
            list::run(
                mentor.as_deref(),
                *semester,
                *unassigned,
                *all,
                *limit,
                ctx,
                flags,
            )
            .await
        }
        MenteeCommands::Get { id } => get::run(id, ctx, flags).await,
        MenteeCommands::Update {
            id,
            name,
            enrollment_no,
            semester,
        } => {
            update::run(
                id,
                name.as_deref(),
                enrollment_no.as_deref(),
                *semester,
                ctx,
                flags,
            )
            .await
        }
        MenteeCommands::Assign {
            id,
            mentor,
            unassign,
        } => assign::run(id, mentor.as_deref(), *unassign, ctx, flags).await,
        MenteeCommands::Deactivate { id } => update::deactivate(id, ctx, flags).await,
        MenteeCommands::Import { file, strategy } => {
            import::run(file, strategy.as_deref(), ctx, flags).await
        }
    }
}
