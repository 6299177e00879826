use mentora_db::repos::mentee::MenteeFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_semester;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    mentor: Option<&str>,
    semester: Option<u8>,
    unassigned: bool,
    all: bool,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let filter = MenteeFilter {
        active: if all { None } else { Some(true) },
        mentor_id: mentor.map(String::from),
        unassigned,
        semester: semester.map(parse_semester).transpose()?,
        limit: Some(limit),
    };

    let mentees = ctx.service().list_mentees(&filter).await?;
    output(&mentees, flags.format)
}
