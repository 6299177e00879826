//! Mentor availability changes.
//!
//! Deactivate and delete both mark the mentor inactive first, then ask the
//! engine to redistribute its mentees. A failed redistribution is reported
//! as a warning and never blocks the mentor change; the stranded mentees are
//! picked up later by `mnt assign`.

use anyhow::Context;
use mentora_core::entities::Mentor;
use mentora_core::responses::RebalanceOutcome;
use mentora_engine::EngineError;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MentorRemovalResponse {
    mentor: Mentor,
    deleted: bool,
    rebalance: Option<RebalanceOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

pub async fn activate(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mentor = ctx
        .service()
        .set_mentor_active(id, true)
        .await
        .with_context(|| format!("failed to activate mentor {id}"))?;
    output(&mentor, flags.format)
}

pub async fn deactivate(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mentor = ctx
        .service()
        .set_mentor_active(id, false)
        .await
        .with_context(|| format!("failed to deactivate mentor {id}"))?;
    let (rebalance, warning) = redistribute(id, ctx).await;

    output(
        &MentorRemovalResponse {
            mentor,
            deleted: false,
            rebalance,
            warning,
        },
        flags.format,
    )
}

pub async fn delete(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut mentor = ctx
        .service()
        .get_mentor(id)
        .await
        .with_context(|| format!("mentor {id} not found"))?;
    if mentor.active {
        mentor = ctx.service().set_mentor_active(id, false).await?;
    }
    let (rebalance, warning) = redistribute(id, ctx).await;

    ctx.service()
        .delete_mentor(id)
        .await
        .with_context(|| format!("failed to delete mentor {id}"))?;

    output(
        &MentorRemovalResponse {
            mentor,
            deleted: true,
            rebalance,
            warning,
        },
        flags.format,
    )
}

async fn redistribute(id: &str, ctx: &AppContext) -> (Option<RebalanceOutcome>, Option<String>) {
    summarize(id, ctx.engine.rebalance_after_mentor_removal(id).await)
}

fn summarize(
    id: &str,
    result: Result<RebalanceOutcome, EngineError>,
) -> (Option<RebalanceOutcome>, Option<String>) {
    match result {
        Ok(outcome) => {
            let warning = (outcome.unassigned_count > 0).then(|| {
                format!(
                    "{} mentee(s) left unassigned: no other active mentor",
                    outcome.unassigned_count
                )
            });
            (Some(outcome), warning)
        }
        Err(EngineError::Notify { applied, source }) => {
            tracing::warn!(mentor = %id, error = %source, "reassignment notice failed");
            let outcome = RebalanceOutcome {
                mentor_id: id.to_string(),
                moved_count: applied,
                unassigned_count: 0,
                ok: true,
            };
            (
                Some(outcome),
                Some(format!(
                    "{applied} mentee(s) moved but the reassignment notice failed: {source}"
                )),
            )
        }
        Err(error) => {
            let error = anyhow::Error::from(error);
            tracing::warn!(mentor = %id, error = %format!("{error:#}"), "rebalance failed");
            (
                None,
                Some(format!(
                    "rebalance failed: {error:#}; run `mnt assign` to place remaining mentees"
                )),
            )
        }
    }
}
