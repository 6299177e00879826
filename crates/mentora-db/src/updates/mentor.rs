//! Mentor update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MentorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Option<String>>,
}

impl MentorUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

pub struct MentorUpdateBuilder(MentorUpdate);

impl MentorUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MentorUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: Option<String>) -> Self {
        self.0.email = Some(email);
        self
    }

    #[must_use]
    pub fn build(self) -> MentorUpdate {
        self.0
    }
}

impl Default for MentorUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
