//! Core error type for Mentora.
//!
//! Domain-specific errors (`DatabaseError`, `EngineError`, `ConfigError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A semester outside `1..=8` was supplied.
    #[error("Invalid semester {value}: expected a value between 1 and 8")]
    InvalidSemester { value: u8 },
}
