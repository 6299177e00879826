//! Roster snapshot and the collaborator traits the engine drives.
//!
//! The engine never talks to storage directly. It reads one
//! [`RosterSnapshot`] per invocation through [`RosterProvider`], writes each
//! decision through [`AssignmentWriter`], and hands one aggregate
//! [`ChangeNotice`] to [`ChangeNotifier`].

use std::collections::HashSet;

use async_trait::async_trait;
use mentora_core::entities::{Mentee, Mentor};
use mentora_core::enums::TargetRole;
use serde::Serialize;

/// Error type returned by collaborator implementations.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One placement decision: `mentee_id` now belongs to `mentor_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub mentee_id: String,
    pub mentor_id: String,
}

/// Aggregate "reassignment occurred" event for the notification subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeNotice {
    pub message: String,
    pub target_roles: Vec<TargetRole>,
    /// Number of mentees the event covers.
    pub count: u32,
}

/// Read-once view of the roster an invocation operates on.
///
/// `mentors` includes inactive mentors so that mentees still pointing at one
/// can be told apart from mentees pointing at an id that does not exist.
/// `mentees` holds active mentees only.
#[derive(Debug, Clone, Default)]
pub struct RosterSnapshot {
    pub mentors: Vec<Mentor>,
    pub mentees: Vec<Mentee>,
}

impl RosterSnapshot {
    /// Whether `mentor_id` names an active mentor in this snapshot.
    #[must_use]
    pub fn is_active_mentor(&self, mentor_id: &str) -> bool {
        self.mentors.iter().any(|m| m.active && m.id == mentor_id)
    }

    fn is_inactive_mentor(&self, mentor_id: &str) -> bool {
        self.mentors.iter().any(|m| !m.active && m.id == mentor_id)
    }

    /// Active mentors, excluding `departing` if given.
    pub fn active_mentors<'a>(
        &'a self,
        departing: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Mentor> + 'a {
        self.mentors
            .iter()
            .filter(move |m| m.active && Some(m.id.as_str()) != departing)
    }

    /// Sorted, de-duplicated ids of active mentors other than `departing`.
    #[must_use]
    pub fn candidate_ids(&self, departing: Option<&str>) -> Vec<String> {
        let mut ids: Vec<String> = self
            .active_mentors(departing)
            .map(|m| m.id.clone())
            .collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Active mentees currently pointing at `mentor_id`.
    #[must_use]
    pub fn mentees_of(&self, mentor_id: &str) -> Vec<Mentee> {
        self.mentees
            .iter()
            .filter(|m| m.active && m.mentor_id.as_deref() == Some(mentor_id))
            .cloned()
            .collect()
    }

    /// Active mentees that need a mentor: unassigned, or pointing at an
    /// inactive mentor.
    #[must_use]
    pub fn orphaned_mentees(&self) -> Vec<Mentee> {
        self.mentees
            .iter()
            .filter(|m| {
                m.active
                    && m.mentor_id
                        .as_deref()
                        .is_none_or(|id| self.is_inactive_mentor(id))
            })
            .cloned()
            .collect()
    }

    /// Mentees that count towards the load of the mentors that stay.
    ///
    /// Skips unassigned mentees, mentees of `departing`, mentees pointing at
    /// a known inactive mentor, and any mentee in `moving`. A mentee pointing
    /// at an unknown id is kept so that the load index can reject it.
    pub fn countable_mentees<'a>(
        &'a self,
        departing: Option<&'a str>,
        moving: &'a HashSet<&'a str>,
    ) -> impl Iterator<Item = &'a Mentee> + 'a {
        self.mentees.iter().filter(move |m| {
            let Some(mentor_id) = m.mentor_id.as_deref() else {
                return false;
            };
            m.active
                && Some(mentor_id) != departing
                && !self.is_inactive_mentor(mentor_id)
                && !moving.contains(m.id.as_str())
        })
    }
}

/// Supplies the roster snapshot for one engine invocation.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    async fn roster_snapshot(&self) -> Result<RosterSnapshot, CollaboratorError>;
}

/// Applies one mentee's assignment. Must be idempotent.
#[async_trait]
pub trait AssignmentWriter: Send + Sync {
    async fn write_assignment(
        &self,
        mentee_id: &str,
        mentor_id: Option<&str>,
    ) -> Result<(), CollaboratorError>;
}

/// Receives aggregate reassignment events.
#[async_trait]
pub trait ChangeNotifier: Send + Sync {
    async fn notify(&self, notice: &ChangeNotice) -> Result<(), CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::fixtures::{mentee, mentor};

    fn snapshot() -> RosterSnapshot {
        RosterSnapshot {
            mentors: vec![mentor("A", true), mentor("B", true), mentor("Z", false)],
            mentees: vec![
                mentee("m1", 1, Some("A")),
                mentee("m2", 2, Some("B")),
                mentee("m3", 3, Some("Z")),
                mentee("m4", 4, None),
                mentee("m5", 5, Some("A")),
            ],
        }
    }

    #[test]
    fn candidate_ids_exclude_departing_and_inactive() {
        let snap = snapshot();
        assert_eq!(snap.candidate_ids(None), vec!["A", "B"]);
        assert_eq!(snap.candidate_ids(Some("A")), vec!["B"]);
    }

    #[test]
    fn mentees_of_uses_reverse_lookup() {
        let snap = snapshot();
        let ids: Vec<_> = snap.mentees_of("A").into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m5"]);
    }

    #[test]
    fn orphaned_includes_unassigned_and_inactive_mentor() {
        let snap = snapshot();
        let ids: Vec<_> = snap.orphaned_mentees().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m3", "m4"]);
    }

    #[test]
    fn countable_skips_departing_inactive_and_moving() {
        let snap = snapshot();
        let moving: HashSet<&str> = ["m2"].into_iter().collect();
        let ids: Vec<_> = snap
            .countable_mentees(Some("A"), &moving)
            .map(|m| m.id.as_str())
            .collect();
        assert!(ids.is_empty());

        let none = HashSet::new();
        let ids: Vec<_> = snap
            .countable_mentees(None, &none)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m1", "m2", "m5"]);
    }
}
