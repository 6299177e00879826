use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TargetRole;

/// An operator-facing alert stored in the notification feed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub target_roles: Vec<TargetRole>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
