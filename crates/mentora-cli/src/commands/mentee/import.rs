//! `mnt mentee import <file.json>`: create a batch of mentees atomically,
//! then place them with the chosen strategy.
//!
//! The file is a JSON array of `{ "name", "enrollment_no", "semester",
//! "mentor_id"? }` records.

use std::path::Path;

use anyhow::Context;
use mentora_core::responses::BatchOutcome;
use mentora_db::repos::mentee::NewMentee;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::resolve_strategy;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ImportResponse {
    imported: usize,
    mentee_ids: Vec<String>,
    placement: BatchOutcome,
}

pub async fn run(
    file: &str,
    strategy: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let strategy = resolve_strategy(strategy, &ctx.config)?;
    let batch = read_batch(Path::new(file)).await?;

    let created = ctx.service().import_mentees(&batch).await?;
    let pending: Vec<_> = created
        .iter()
        .filter(|mentee| mentee.is_unassigned())
        .cloned()
        .collect();

    let placement = ctx
        .engine
        .assign_batch(&pending, strategy)
        .await
        .with_context(|| {
            format!(
                "imported {} mentee(s) but placement failed; run `mnt assign` to retry",
                created.len()
            )
        })?;

    output(
        &ImportResponse {
            imported: created.len(),
            mentee_ids: created.into_iter().map(|mentee| mentee.id).collect(),
            placement,
        },
        flags.format,
    )
}

async fn read_batch(path: &Path) -> anyhow::Result<Vec<NewMentee>> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let batch: Vec<NewMentee> = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a JSON array of mentee records", path.display()))?;
    if batch.is_empty() {
        anyhow::bail!("{} contains no mentee records", path.display());
    }
    Ok(batch)
}
