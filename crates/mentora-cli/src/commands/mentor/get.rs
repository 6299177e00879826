use anyhow::Context;
use mentora_core::entities::{Mentee, Mentor};
use mentora_db::repos::mentee::MenteeFilter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MentorDetailResponse {
    mentor: Mentor,
    mentees: Vec<Mentee>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mentor = ctx
        .service()
        .get_mentor(id)
        .await
        .with_context(|| format!("mentor {id} not found"))?;
    let mentees = ctx
        .service()
        .list_mentees(&MenteeFilter {
            mentor_id: Some(mentor.id.clone()),
            active: Some(true),
            ..Default::default()
        })
        .await?;
    output(&MentorDetailResponse { mentor, mentees }, flags.format)
}
