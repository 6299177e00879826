use mentora_db::updates::mentor::MentorUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    name: Option<&str>,
    email: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = MentorUpdateBuilder::new();
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(email) = email {
        // An empty --email clears the address.
        builder = builder.email((!email.is_empty()).then(|| email.to_string()));
    }

    let mentor = ctx.service().update_mentor(id, builder.build()).await?;
    output(&mentor, flags.format)
}
