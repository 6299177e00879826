use mentora_core::entities::Mentee;
use mentora_core::enums::AssignmentStrategy;
use mentora_core::responses::BatchOutcome;
use mentora_db::repos::mentee::NewMentee;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_enum, parse_semester};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MenteeCreatedResponse {
    mentee: Mentee,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<BatchOutcome>,
}

pub async fn run(
    name: &str,
    enrollment_no: &str,
    semester: u8,
    mentor: Option<&str>,
    strategy: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let strategy = strategy
        .map(|value| parse_enum::<AssignmentStrategy>(value, "strategy"))
        .transpose()?;
    let new = NewMentee {
        name: name.to_string(),
        enrollment_no: enrollment_no.to_string(),
        semester: parse_semester(semester)?,
        mentor_id: mentor.map(String::from),
    };

    let mut mentee = ctx.service().create_mentee(&new).await?;
    let placement = match strategy {
        Some(strategy) => {
            let outcome = ctx
                .engine
                .assign_batch(std::slice::from_ref(&mentee), strategy)
                .await?;
            mentee = ctx.service().get_mentee(&mentee.id).await?;
            Some(outcome)
        }
        None => None,
    };

    output(&MenteeCreatedResponse { mentee, placement }, flags.format)
}
