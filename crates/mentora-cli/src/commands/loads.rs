use std::collections::HashMap;

use mentora_core::responses::MentorLoad;
use mentora_db::repos::mentor::MentorFilter;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LoadRow {
    mentor_id: String,
    name: String,
    total: u32,
    /// `semester:count` pairs, empty semesters omitted.
    by_semester: String,
}

/// Handle `mnt loads`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = ctx.engine.load_report().await?;
    if flags.format != OutputFormat::Table {
        return output(&report, flags.format);
    }

    let names: HashMap<String, String> = ctx
        .service()
        .list_mentors(&MentorFilter {
            active: Some(true),
            limit: None,
        })
        .await?
        .into_iter()
        .map(|mentor| (mentor.id, mentor.name))
        .collect();

    let rows: Vec<LoadRow> = report
        .into_iter()
        .map(|load| to_row(load, &names))
        .collect();
    output(&rows, flags.format)
}

fn to_row(load: MentorLoad, names: &HashMap<String, String>) -> LoadRow {
    let by_semester = load
        .semesters
        .iter()
        .map(|entry| format!("{}:{}", entry.semester, entry.count))
        .collect::<Vec<_>>()
        .join(" ");
    LoadRow {
        name: names.get(&load.mentor_id).cloned().unwrap_or_default(),
        mentor_id: load.mentor_id,
        total: load.total,
        by_semester,
    }
}
