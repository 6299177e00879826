//! Per-mentor load bookkeeping.
//!
//! A [`LoadIndex`] is built fresh for every engine invocation from the roster
//! snapshot and then mutated as decisions are made, so each decision in a
//! batch sees the effect of every earlier one.

use std::collections::BTreeMap;

use mentora_core::Semester;
use mentora_core::entities::{Mentee, Mentor};
use mentora_core::responses::{MentorLoad, SemesterCount};

use crate::error::EngineError;

/// Total and per-semester mentee counts for one mentor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemesterLoad {
    total: u32,
    by_semester: [u32; Semester::COUNT],
}

impl SemesterLoad {
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Count for `semester`; semesters never seen read as zero.
    #[must_use]
    pub const fn semester(&self, semester: Semester) -> u32 {
        self.by_semester[semester.index()]
    }

    const fn record(&mut self, semester: Semester) {
        self.total += 1;
        self.by_semester[semester.index()] += 1;
    }
}

/// Mentor id → load. Keys are exactly the active mentor ids it was built
/// from, kept in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadIndex {
    loads: BTreeMap<String, SemesterLoad>,
}

impl LoadIndex {
    #[must_use]
    pub fn get(&self, mentor_id: &str) -> Option<&SemesterLoad> {
        self.loads.get(mentor_id)
    }

    #[must_use]
    pub fn total_load(&self, mentor_id: &str) -> u32 {
        self.get(mentor_id).map_or(0, SemesterLoad::total)
    }

    #[must_use]
    pub fn semester_load(&self, mentor_id: &str, semester: Semester) -> u32 {
        self.get(mentor_id).map_or(0, |load| load.semester(semester))
    }

    /// Count one more `semester` mentee against `mentor_id`.
    pub fn record(&mut self, mentor_id: &str, semester: Semester) {
        self.loads
            .entry(mentor_id.to_string())
            .or_default()
            .record(semester);
    }

    pub fn mentor_ids(&self) -> impl Iterator<Item = &str> {
        self.loads.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Sum of totals across all mentors.
    #[must_use]
    pub fn total_assigned(&self) -> u32 {
        self.loads.values().map(SemesterLoad::total).sum()
    }

    /// Operator-facing view, one row per mentor in id order.
    #[must_use]
    pub fn report(&self) -> Vec<MentorLoad> {
        self.loads
            .iter()
            .map(|(mentor_id, load)| MentorLoad {
                mentor_id: mentor_id.clone(),
                total: load.total(),
                semesters: Semester::all()
                    .filter_map(|semester| {
                        let count = load.semester(semester);
                        (count > 0).then_some(SemesterCount { semester, count })
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Build a load index from active mentors and the mentees that count
/// towards their load.
///
/// Inactive mentors are skipped, as are inactive and unassigned mentees.
///
/// # Errors
///
/// Returns `EngineError::InconsistentSnapshot` if a counted mentee references
/// a mentor id that is not an active mentor in `mentors`.
pub fn build_load_index<'a>(
    mentors: impl IntoIterator<Item = &'a Mentor>,
    mentees: impl IntoIterator<Item = &'a Mentee>,
) -> Result<LoadIndex, EngineError> {
    let mut loads: BTreeMap<String, SemesterLoad> = mentors
        .into_iter()
        .filter(|m| m.active)
        .map(|m| (m.id.clone(), SemesterLoad::default()))
        .collect();

    for mentee in mentees.into_iter().filter(|m| m.active) {
        let Some(mentor_id) = mentee.mentor_id.as_deref() else {
            continue;
        };
        let load = loads
            .get_mut(mentor_id)
            .ok_or_else(|| EngineError::InconsistentSnapshot {
                mentee_id: mentee.id.clone(),
                mentor_id: mentor_id.to_string(),
            })?;
        load.record(mentee.semester);
    }

    Ok(LoadIndex { loads })
}
