//! `mnt assign`: place every active mentee that has no active mentor.
//!
//! `--dry-run` runs the same engine over an in-memory copy of the roster and
//! reports the placements it would make.

use std::collections::HashMap;

use mentora_core::responses::BatchOutcome;
use mentora_engine::memory::InMemoryRoster;
use mentora_engine::{AssignmentEngine, RosterProvider};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssignArgs;
use crate::commands::shared::parse::resolve_strategy;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Placement {
    mentee_id: String,
    from: Option<String>,
    to: Option<String>,
}

#[derive(Debug, Serialize)]
struct DryRunResponse {
    dry_run: bool,
    outcome: BatchOutcome,
    placements: Vec<Placement>,
}

pub async fn handle(args: &AssignArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategy = resolve_strategy(args.strategy.as_deref(), &ctx.config)?;

    if !args.dry_run {
        let outcome = ctx.engine.assign_unassigned(strategy).await?;
        return output(&outcome, flags.format);
    }

    let snapshot = ctx
        .service()
        .roster_snapshot()
        .await
        .map_err(|error| anyhow::anyhow!("failed to read roster: {error}"))?;
    let before: HashMap<String, Option<String>> = snapshot
        .mentees
        .iter()
        .map(|mentee| (mentee.id.clone(), mentee.mentor_id.clone()))
        .collect();

    let preview = AssignmentEngine::new(
        InMemoryRoster::from_snapshot(snapshot),
        ctx.config.assignment.clone(),
    );
    let outcome = preview.assign_unassigned(strategy).await?;
    let placements = diff(&before, &preview);

    output(
        &DryRunResponse {
            dry_run: true,
            outcome,
            placements,
        },
        flags.format,
    )
}

fn diff(
    before: &HashMap<String, Option<String>>,
    preview: &AssignmentEngine<InMemoryRoster>,
) -> Vec<Placement> {
    let mut placements: Vec<Placement> = preview
        .store()
        .mentees()
        .into_iter()
        .filter_map(|mentee| {
            let from = before.get(&mentee.id)?.clone();
            (from != mentee.mentor_id).then(|| Placement {
                mentee_id: mentee.id,
                from,
                to: mentee.mentor_id,
            })
        })
        .collect();
    placements.sort_by(|a, b| a.mentee_id.cmp(&b.mentee_id));
    placements
}
