//! Engine collaborator traits backed by the roster database.
//!
//! The snapshot holds every mentor (active or not) and every active mentee.
//! Assignment writes go through `assign_mentor`; notices land in the
//! notification feed.

use async_trait::async_trait;
use mentora_engine::roster::{
    AssignmentWriter, ChangeNotice, ChangeNotifier, CollaboratorError, RosterProvider,
    RosterSnapshot,
};

use crate::repos::mentee::MenteeFilter;
use crate::repos::mentor::MentorFilter;
use crate::service::MentoraService;

#[async_trait]
impl RosterProvider for MentoraService {
    async fn roster_snapshot(&self) -> Result<RosterSnapshot, CollaboratorError> {
        let mentors = self.list_mentors(&MentorFilter::default()).await?;
        let mentees = self
            .list_mentees(&MenteeFilter {
                active: Some(true),
                ..Default::default()
            })
            .await?;
        tracing::debug!(
            mentors = mentors.len(),
            mentees = mentees.len(),
            "read roster snapshot"
        );
        Ok(RosterSnapshot { mentors, mentees })
    }
}

#[async_trait]
impl AssignmentWriter for MentoraService {
    async fn write_assignment(
        &self,
        mentee_id: &str,
        mentor_id: Option<&str>,
    ) -> Result<(), CollaboratorError> {
        self.assign_mentor(mentee_id, mentor_id).await?;
        Ok(())
    }
}

#[async_trait]
impl ChangeNotifier for MentoraService {
    async fn notify(&self, notice: &ChangeNotice) -> Result<(), CollaboratorError> {
        self.create_notification(&notice.message, &notice.target_roles)
            .await?;
        Ok(())
    }
}
