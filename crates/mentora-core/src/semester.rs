//! Academic semester newtype.
//!
//! Mentees belong to exactly one semester in `1..=8`. The value is validated
//! on construction and on deserialization, so any `Semester` in memory can be
//! used directly as an index into per-semester load tables.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A validated academic semester (1 through 8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(8);

    /// Number of semesters tracked by the system.
    pub const COUNT: usize = 8;

    /// Create a semester, rejecting values outside `1..=8`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidSemester` if `value` is 0 or greater than 8.
    pub const fn new(value: u8) -> Result<Self, CoreError> {
        if value >= 1 && value <= 8 {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidSemester { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, suitable for indexing `[_; Semester::COUNT]`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over every semester in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=8).map(Self)
    }
}

impl TryFrom<u8> for Semester {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(8)]
    fn accepts_valid_semesters(#[case] value: u8) {
        let semester = Semester::new(value).unwrap();
        assert_eq!(semester.get(), value);
        assert_eq!(semester.index(), usize::from(value) - 1);
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(255)]
    fn rejects_out_of_range(#[case] value: u8) {
        let CoreError::InvalidSemester { value: rejected } = Semester::new(value).unwrap_err();
        assert_eq!(rejected, value);
        assert!(
            CoreError::InvalidSemester { value }
                .to_string()
                .contains("between 1 and 8")
        );
    }

    #[test]
    fn all_yields_eight_in_order() {
        let values: Vec<u8> = Semester::all().map(Semester::get).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Semester = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<Semester>("0").is_err());
        assert!(serde_json::from_str::<Semester>("12").is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Semester::LAST).unwrap();
        assert_eq!(json, "8");
    }
}
