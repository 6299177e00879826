//! In-process roster implementing every collaborator trait.
//!
//! Used by `mnt assign --dry-run` to preview placements against a copy of
//! the stored roster, and by tests. Writes can be made to fail after a fixed
//! number of successes to exercise partial application, and notices can be
//! rejected outright.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use mentora_core::entities::{Mentee, Mentor};

use crate::roster::{
    AssignmentWriter, ChangeNotice, ChangeNotifier, CollaboratorError, RosterProvider,
    RosterSnapshot,
};

#[derive(Debug, Default)]
struct State {
    mentors: Vec<Mentor>,
    mentees: Vec<Mentee>,
    notices: Vec<ChangeNotice>,
    writes: usize,
    fail_after: Option<usize>,
    reject_notices: bool,
}

/// A roster held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    state: Mutex<State>,
}

impl InMemoryRoster {
    #[must_use]
    pub fn new(mentors: Vec<Mentor>, mentees: Vec<Mentee>) -> Self {
        Self {
            state: Mutex::new(State {
                mentors,
                mentees,
                ..State::default()
            }),
        }
    }

    /// Seed from a snapshot taken elsewhere.
    #[must_use]
    pub fn from_snapshot(snapshot: RosterSnapshot) -> Self {
        Self::new(snapshot.mentors, snapshot.mentees)
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_mentor(&self, mentor: Mentor) {
        self.state().mentors.push(mentor);
    }

    pub fn add_mentee(&self, mentee: Mentee) {
        self.state().mentees.push(mentee);
    }

    /// Flip a mentor's active flag. Returns `false` if the id is unknown.
    pub fn set_mentor_active(&self, mentor_id: &str, active: bool) -> bool {
        let mut state = self.state();
        state
            .mentors
            .iter_mut()
            .find(|m| m.id == mentor_id)
            .map(|m| m.active = active)
            .is_some()
    }

    /// Let the next `successes` writes succeed and fail every write after.
    pub fn fail_writes_after(&self, successes: usize) {
        let mut state = self.state();
        state.fail_after = Some(state.writes + successes);
    }

    /// Make every later `notify` call fail.
    pub fn reject_notices(&self) {
        self.state().reject_notices = true;
    }

    #[must_use]
    pub fn mentees(&self) -> Vec<Mentee> {
        self.state().mentees.clone()
    }

    #[must_use]
    pub fn mentee(&self, mentee_id: &str) -> Option<Mentee> {
        self.state()
            .mentees
            .iter()
            .find(|m| m.id == mentee_id)
            .cloned()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<ChangeNotice> {
        self.state().notices.clone()
    }

    /// Successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.state().writes
    }
}

#[async_trait]
impl RosterProvider for InMemoryRoster {
    async fn roster_snapshot(&self) -> Result<RosterSnapshot, CollaboratorError> {
        let state = self.state();
        Ok(RosterSnapshot {
            mentors: state.mentors.clone(),
            mentees: state.mentees.iter().filter(|m| m.active).cloned().collect(),
        })
    }
}

#[async_trait]
impl AssignmentWriter for InMemoryRoster {
    async fn write_assignment(
        &self,
        mentee_id: &str,
        mentor_id: Option<&str>,
    ) -> Result<(), CollaboratorError> {
        let mut state = self.state();
        if state.fail_after.is_some_and(|limit| state.writes >= limit) {
            return Err(format!("write rejected for mentee {mentee_id}").into());
        }
        let mentee = state
            .mentees
            .iter_mut()
            .find(|m| m.id == mentee_id)
            .ok_or_else(|| format!("unknown mentee {mentee_id}"))?;
        mentee.mentor_id = mentor_id.map(String::from);
        state.writes += 1;
        Ok(())
    }
}

#[async_trait]
impl ChangeNotifier for InMemoryRoster {
    async fn notify(&self, notice: &ChangeNotice) -> Result<(), CollaboratorError> {
        let mut state = self.state();
        if state.reject_notices {
            return Err("notification feed unavailable".into());
        }
        state.notices.push(notice.clone());
        Ok(())
    }
}
