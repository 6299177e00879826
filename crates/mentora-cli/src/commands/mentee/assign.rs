use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Manual placement. The target mentor must be active.
pub async fn run(
    id: &str,
    mentor: Option<&str>,
    unassign: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if mentor.is_none() && !unassign {
        bail!("pass --mentor <id> or --unassign");
    }

    let mentee = ctx.service().assign_mentor(id, mentor).await?;
    output(&mentee, flags.format)
}
