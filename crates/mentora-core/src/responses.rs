//! Outcome and report types returned by engine operations and printed as JSON
//! by `mnt` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AssignmentStrategy;
use crate::semester::Semester;

/// Result of redistributing a removed mentor's mentees.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RebalanceOutcome {
    pub mentor_id: String,
    /// Mentees moved to another active mentor.
    pub moved_count: u32,
    /// Mentees left without a mentor because no other active mentor exists.
    pub unassigned_count: u32,
    pub ok: bool,
}

impl RebalanceOutcome {
    /// Outcome for a mentor that had nothing to redistribute.
    #[must_use]
    pub fn noop(mentor_id: &str) -> Self {
        Self {
            mentor_id: mentor_id.to_string(),
            moved_count: 0,
            unassigned_count: 0,
            ok: true,
        }
    }
}

/// Result of placing a batch of mentees.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BatchOutcome {
    pub strategy: AssignmentStrategy,
    /// Mentees that received a concrete mentor.
    pub assigned_count: u32,
    /// Number of active mentors the batch was placed against.
    pub mentor_count: u32,
    /// RNG seed used by the `semester` strategy, recorded for replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Per-semester count for one mentor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SemesterCount {
    pub semester: Semester,
    pub count: u32,
}

/// Load of a single active mentor, as shown by `mnt loads`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MentorLoad {
    pub mentor_id: String,
    pub total: u32,
    /// Only semesters with at least one mentee are listed.
    pub semesters: Vec<SemesterCount>,
}
