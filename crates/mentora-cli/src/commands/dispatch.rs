use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Mentor { action } => commands::mentor::handle(&action, ctx, flags).await,
        Commands::Mentee { action } => commands::mentee::handle(&action, ctx, flags).await,
        Commands::Assign(args) => commands::assign::handle(&args, ctx, flags).await,
        Commands::Loads => commands::loads::handle(ctx, flags).await,
        Commands::Notification { action } => {
            commands::notification::handle(&action, ctx, flags).await
        }
        Commands::Init(_) => anyhow::bail!("init is handled before project discovery"),
    }
}
