use mentora_db::repos::mentor::MentorFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    all: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mentors = ctx
        .service()
        .list_mentors(&MentorFilter {
            active: if all { None } else { Some(true) },
            limit: Some(limit),
        })
        .await?;
    output(&mentors, flags.format)
}
