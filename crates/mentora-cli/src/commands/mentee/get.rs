use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mentee = ctx
        .service()
        .get_mentee(id)
        .await
        .with_context(|| format!("mentee {id} not found"))?;
    output(&mentee, flags.format)
}
