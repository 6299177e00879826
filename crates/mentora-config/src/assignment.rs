//! Assignment engine configuration.

use mentora_core::enums::{AssignmentStrategy, TargetRole};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_notify_roles() -> Vec<TargetRole> {
    vec![TargetRole::Admin]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignmentConfig {
    /// Strategy used by `mnt assign` and `mnt mentee import` when none is given.
    #[serde(default)]
    pub default_strategy: AssignmentStrategy,

    /// Fixed seed for the `semester` strategy. When unset a fresh seed is
    /// drawn per run and reported in the outcome.
    #[serde(default)]
    pub semester_seed: Option<u64>,

    /// Audience of the aggregate "mentees reassigned" notification.
    #[serde(default = "default_notify_roles")]
    pub notify_roles: Vec<TargetRole>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            default_strategy: AssignmentStrategy::default(),
            semester_seed: None,
            notify_roles: default_notify_roles(),
        }
    }
}

impl AssignmentConfig {
    /// Reject configurations the engine cannot act on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `notify_roles` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notify_roles.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assignment.notify_roles".into(),
                reason: "at least one target role is required".into(),
            });
        }
        Ok(())
    }
}
