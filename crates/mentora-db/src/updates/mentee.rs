//! Mentee update builder.
//!
//! Mentor placement is not part of this update; it goes through
//! `MentoraService::assign_mentor` so the active-mentor check always runs.

use mentora_core::Semester;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MenteeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
}

impl MenteeUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.enrollment_no.is_none() && self.semester.is_none()
    }
}

pub struct MenteeUpdateBuilder(MenteeUpdate);

impl MenteeUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MenteeUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn enrollment_no(mut self, enrollment_no: impl Into<String>) -> Self {
        self.0.enrollment_no = Some(enrollment_no.into());
        self
    }

    #[must_use]
    pub const fn semester(mut self, semester: Semester) -> Self {
        self.0.semester = Some(semester);
        self
    }

    #[must_use]
    pub fn build(self) -> MenteeUpdate {
        self.0
    }
}

impl Default for MenteeUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_changed_fields_only() {
        let update = MenteeUpdateBuilder::new()
            .semester(Semester::new(4).unwrap())
            .build();
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "semester": 4 })
        );
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(MenteeUpdateBuilder::new().build().is_empty());
        assert!(!MenteeUpdateBuilder::new().name("x").build().is_empty());
    }
}
