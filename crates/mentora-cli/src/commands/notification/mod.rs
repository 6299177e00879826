use mentora_core::enums::TargetRole;
use mentora_db::repos::notification::NotificationFilter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NotificationCommands;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mnt notification`.
pub async fn handle(
    action: &NotificationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        NotificationCommands::List {
            unread,
            role,
            limit,
        } => {
            let filter = NotificationFilter {
                unread_only: *unread,
                role: role
                    .as_deref()
                    .map(|value| parse_enum::<TargetRole>(value, "role"))
                    .transpose()?,
                limit: Some(effective_limit(
                    *limit,
                    flags.limit,
                    ctx.config.general.default_limit,
                )),
            };
            let notifications = ctx.service().list_notifications(&filter).await?;
            output(&notifications, flags.format)
        }
        NotificationCommands::Read { id } => {
            let notification = ctx.service().mark_notification_read(id).await?;
            output(&notification, flags.format)
        }
    }
}
