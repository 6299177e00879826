use mentora_db::updates::mentee::MenteeUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_semester;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    name: Option<&str>,
    enrollment_no: Option<&str>,
    semester: Option<u8>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = MenteeUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(enrollment_no) = enrollment_no {
        builder = builder.enrollment_no(enrollment_no);
    }
    if let Some(semester) = semester {
        builder = builder.semester(parse_semester(semester)?);
    }

    let mentee = ctx.service().update_mentee(id, builder.build()).await?;
    output(&mentee, flags.format)
}

pub async fn deactivate(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mentee = ctx.service().set_mentee_active(id, false).await?;
    output(&mentee, flags.format)
}
