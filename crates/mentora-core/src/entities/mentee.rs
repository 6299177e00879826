use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::semester::Semester;

/// A student tracked by the system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Mentee {
    pub id: String,
    pub name: String,
    /// Institution enrollment (roll) number. Unique across mentees.
    pub enrollment_no: String,
    pub semester: Semester,
    /// `None` means unassigned.
    pub mentor_id: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Mentee {
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.mentor_id.is_none()
    }
}
