//! Assignment strategies and notification target roles.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for SQL storage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AssignmentStrategy
// ---------------------------------------------------------------------------

/// Policy used to place a batch of mentees onto mentors.
///
/// `Balanced` and `Equal` are deterministic for a given roster and input order.
/// `Semester` draws from a seeded RNG; the seed is reported with the outcome.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStrategy {
    /// Strict round robin by batch position, ignoring load and semester.
    Equal,
    /// Mentors grouped into semester buckets, random pick within the bucket.
    Semester,
    /// Greedy least-load placement that spreads semester coverage first.
    #[default]
    Balanced,
    /// No automatic placement; every mentee is left unassigned.
    Manual,
}

impl AssignmentStrategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Semester => "semester",
            Self::Balanced => "balanced",
            Self::Manual => "manual",
        }
    }

    /// Whether two runs over identical input produce identical output.
    #[must_use]
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::Semester)
    }
}

impl fmt::Display for AssignmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TargetRole
// ---------------------------------------------------------------------------

/// Audience of an operator-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetRole {
    Admin,
    Mentor,
    Mentee,
}

impl TargetRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Mentor => "mentor",
            Self::Mentee => "mentee",
        }
    }
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_serde_matches_as_str() {
        for strategy in [
            AssignmentStrategy::Equal,
            AssignmentStrategy::Semester,
            AssignmentStrategy::Balanced,
            AssignmentStrategy::Manual,
        ] {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
        }
    }

    #[test]
    fn default_strategy_is_balanced() {
        assert_eq!(AssignmentStrategy::default(), AssignmentStrategy::Balanced);
    }

    #[test]
    fn only_semester_strategy_is_random() {
        assert!(AssignmentStrategy::Equal.is_deterministic());
        assert!(AssignmentStrategy::Balanced.is_deterministic());
        assert!(AssignmentStrategy::Manual.is_deterministic());
        assert!(!AssignmentStrategy::Semester.is_deterministic());
    }

    #[test]
    fn target_role_roundtrip() {
        let role: TargetRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, TargetRole::Admin);
        assert_eq!(TargetRole::Mentee.to_string(), "mentee");
    }
}
