//! Greedy, semester-diversity-aware placement.
//!
//! Mentees are placed one at a time in ascending semester order (input order
//! within a semester). For each mentee, mentors with no mentee of that
//! semester yet are preferred; among the preferred set, or among all
//! candidates once every mentor covers the semester, the least-loaded mentor
//! wins and ties go to the smallest mentor id. The chosen mentor's load is
//! bumped in the index before the next mentee is considered.
//!
//! Runs in O(mentees × mentors) and never backtracks.

use mentora_core::Semester;
use mentora_core::entities::Mentee;

use crate::error::EngineError;
use crate::load_index::LoadIndex;
use crate::roster::Assignment;

/// Place every mentee in `mentees` on one of `candidates`.
///
/// `candidates` must already be limited to active mentors that may receive
/// mentees. Decisions are returned in processing order and cover each input
/// mentee exactly once. `index` is updated with every decision.
///
/// # Errors
///
/// Returns `EngineError::NoMentorsAvailable` if `candidates` is empty.
pub fn assign_balanced(
    index: &mut LoadIndex,
    mentees: &[Mentee],
    candidates: &[String],
) -> Result<Vec<Assignment>, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::NoMentorsAvailable);
    }

    let mut order: Vec<&Mentee> = mentees.iter().collect();
    order.sort_by_key(|m| m.semester);

    let mut decisions = Vec::with_capacity(order.len());
    for mentee in order {
        let mentor_id = pick_mentor(index, candidates, mentee.semester)
            .ok_or(EngineError::NoMentorsAvailable)?;
        index.record(mentor_id, mentee.semester);
        tracing::debug!(
            mentee = %mentee.id,
            mentor = %mentor_id,
            semester = %mentee.semester,
            load = index.total_load(mentor_id),
            "balanced placement"
        );
        decisions.push(Assignment {
            mentee_id: mentee.id.clone(),
            mentor_id: mentor_id.to_string(),
        });
    }
    Ok(decisions)
}

fn pick_mentor<'a>(
    index: &LoadIndex,
    candidates: &'a [String],
    semester: Semester,
) -> Option<&'a str> {
    let uncovered = candidates
        .iter()
        .filter(|id| index.semester_load(id, semester) == 0);
    least_loaded(index, uncovered)
        .or_else(|| least_loaded(index, candidates.iter()))
        .map(String::as_str)
}

/// Smallest total load, ties to the smallest id.
fn least_loaded<'a>(
    index: &LoadIndex,
    pool: impl Iterator<Item = &'a String>,
) -> Option<&'a String> {
    pool.min_by(|a, b| {
        index
            .total_load(a)
            .cmp(&index.total_load(b))
            .then_with(|| a.cmp(b))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_index::build_load_index;
    use crate::memory::fixtures::{ids, mentee, mentor};
    use pretty_assertions::assert_eq;

    fn empty_index(names: &[&str]) -> LoadIndex {
        let mentors: Vec<_> = names.iter().map(|n| mentor(n, true)).collect();
        build_load_index(&mentors, &[]).unwrap()
    }

    fn placed(decisions: &[Assignment]) -> Vec<(&str, &str)> {
        decisions
            .iter()
            .map(|a| (a.mentee_id.as_str(), a.mentor_id.as_str()))
            .collect()
    }

    #[test]
    fn same_semester_pair_spreads_across_mentors() {
        let mut index = empty_index(&["A", "B", "C"]);
        let mentees = [mentee("x", 5, None), mentee("y", 5, None)];

        let decisions = assign_balanced(&mut index, &mentees, &ids(&["A", "B", "C"])).unwrap();

        assert_eq!(placed(&decisions), vec![("x", "A"), ("y", "B")]);
        assert_eq!(index.total_load("C"), 0);
    }

    #[test]
    fn uncovered_semester_beats_lower_load() {
        let mentors = [mentor("A", true), mentor("B", true)];
        let mut existing = Vec::new();
        for i in 0..5 {
            existing.push(mentee(&format!("a{i}"), 1, Some("A")));
        }
        existing.push(mentee("b0", 3, Some("B")));
        let mut index = build_load_index(&mentors, &existing).unwrap();

        let decisions =
            assign_balanced(&mut index, &[mentee("new", 3, None)], &ids(&["A", "B"])).unwrap();

        assert_eq!(placed(&decisions), vec![("new", "A")]);
        assert_eq!(index.total_load("A"), 6);
    }

    #[test]
    fn falls_back_to_least_load_once_semester_is_covered() {
        let mentors = [mentor("A", true), mentor("B", true)];
        let existing = [
            mentee("a0", 2, Some("A")),
            mentee("a1", 4, Some("A")),
            mentee("b0", 2, Some("B")),
        ];
        let mut index = build_load_index(&mentors, &existing).unwrap();

        let decisions =
            assign_balanced(&mut index, &[mentee("new", 2, None)], &ids(&["A", "B"])).unwrap();

        assert_eq!(placed(&decisions), vec![("new", "B")]);
    }

    #[test]
    fn processes_by_semester_then_input_order() {
        let mut index = empty_index(&["A", "B"]);
        let mentees = [
            mentee("s3-first", 3, None),
            mentee("s1", 1, None),
            mentee("s3-second", 3, None),
        ];

        let decisions = assign_balanced(&mut index, &mentees, &ids(&["A", "B"])).unwrap();

        let order: Vec<_> = decisions.iter().map(|a| a.mentee_id.as_str()).collect();
        assert_eq!(order, vec!["s1", "s3-first", "s3-second"]);
        assert_eq!(
            placed(&decisions),
            vec![("s1", "A"), ("s3-first", "B"), ("s3-second", "A")]
        );
    }

    #[test]
    fn only_candidates_receive_mentees() {
        let mut index = empty_index(&["A", "B", "C"]);
        let mentees: Vec<_> = (0..6).map(|i| mentee(&format!("m{i}"), 1, None)).collect();

        let decisions = assign_balanced(&mut index, &mentees, &ids(&["B", "C"])).unwrap();

        assert!(decisions.iter().all(|a| a.mentor_id != "A"));
        assert_eq!(index.total_load("B"), 3);
        assert_eq!(index.total_load("C"), 3);
    }

    #[test]
    fn empty_candidates_is_no_mentors_available() {
        let mut index = LoadIndex::default();
        let result = assign_balanced(&mut index, &[mentee("m", 1, None)], &[]);
        assert!(matches!(result, Err(EngineError::NoMentorsAvailable)));
    }

    #[test]
    fn empty_batch_yields_no_decisions() {
        let mut index = empty_index(&["A"]);
        let decisions = assign_balanced(&mut index, &[], &ids(&["A"])).unwrap();
        assert!(decisions.is_empty());
        assert_eq!(index.total_load("A"), 0);
    }
}
