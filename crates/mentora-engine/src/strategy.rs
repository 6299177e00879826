//! Batch placement strategies.
//!
//! [`plan_batch`] is the single dispatch point used by bulk import and by the
//! "assign all unassigned" action. Only `balanced` consults the load index;
//! `equal` and `semester` look at candidate order alone and `manual` places
//! nobody.

use mentora_core::entities::Mentee;
use mentora_core::enums::AssignmentStrategy;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::balanced::assign_balanced;
use crate::error::EngineError;
use crate::load_index::LoadIndex;
use crate::roster::Assignment;

/// Decisions for one batch plus the RNG seed, if one was used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    pub assignments: Vec<Assignment>,
    pub seed: Option<u64>,
}

/// Compute placements for `mentees` under `strategy`.
///
/// `candidates` must be sorted by id. `seed` only matters for
/// [`AssignmentStrategy::Semester`]; when absent a fresh seed is drawn and
/// returned in the plan.
///
/// # Errors
///
/// Returns `EngineError::NoMentorsAvailable` if `candidates` is empty and the
/// strategy needs a mentor.
pub fn plan_batch(
    strategy: AssignmentStrategy,
    index: &mut LoadIndex,
    mentees: &[Mentee],
    candidates: &[String],
    seed: Option<u64>,
) -> Result<BatchPlan, EngineError> {
    match strategy {
        AssignmentStrategy::Manual => Ok(BatchPlan::default()),
        AssignmentStrategy::Equal => Ok(BatchPlan {
            assignments: assign_equal(mentees, candidates)?,
            seed: None,
        }),
        AssignmentStrategy::Balanced => Ok(BatchPlan {
            assignments: assign_balanced(index, mentees, candidates)?,
            seed: None,
        }),
        AssignmentStrategy::Semester => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            Ok(BatchPlan {
                assignments: assign_semester_affinity(mentees, candidates, &mut rng)?,
                seed: Some(seed),
            })
        }
    }
}

/// Round robin over `candidates` by batch position.
///
/// # Errors
///
/// Returns `EngineError::NoMentorsAvailable` if `candidates` is empty.
pub fn assign_equal(
    mentees: &[Mentee],
    candidates: &[String],
) -> Result<Vec<Assignment>, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::NoMentorsAvailable);
    }
    Ok(mentees
        .iter()
        .zip(candidates.iter().cycle())
        .map(|(mentee, mentor_id)| Assignment {
            mentee_id: mentee.id.clone(),
            mentor_id: mentor_id.clone(),
        })
        .collect())
}

/// Mentors sharing a semester slot with `semester_number`.
///
/// With `k = min(mentor_count, 8)` slots, semester `s` maps to slot
/// `(s - 1) mod k` and the bucket holds every candidate whose position `i`
/// satisfies `i mod k == slot`.
fn semester_bucket(candidates: &[String], semester_number: u8) -> Vec<&String> {
    let slots = candidates.len().min(mentora_core::Semester::COUNT);
    if slots == 0 {
        return Vec::new();
    }
    let slot = usize::from(semester_number - 1) % slots;
    candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| i % slots == slot)
        .map(|(_, id)| id)
        .collect()
}

/// Random pick within each mentee's semester bucket.
///
/// # Errors
///
/// Returns `EngineError::NoMentorsAvailable` if `candidates` is empty.
pub fn assign_semester_affinity(
    mentees: &[Mentee],
    candidates: &[String],
    rng: &mut StdRng,
) -> Result<Vec<Assignment>, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::NoMentorsAvailable);
    }
    mentees
        .iter()
        .map(|mentee| {
            let bucket = semester_bucket(candidates, mentee.semester.get());
            let mentor_id = bucket
                .choose(rng)
                .ok_or(EngineError::NoMentorsAvailable)?;
            Ok(Assignment {
                mentee_id: mentee.id.clone(),
                mentor_id: (*mentor_id).clone(),
            })
        })
        .collect()
}
