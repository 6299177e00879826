//! Engine error types.

use thiserror::Error;

use crate::roster::CollaboratorError;

/// Errors returned by assignment engine operations.
///
/// None of these are swallowed inside the engine. Callers decide whether to
/// retry, accept partial application, or fall back.
#[derive(Debug, Error)]
pub enum EngineError {
    /// No active mentor exists to receive a mentee.
    #[error("No active mentors available for assignment")]
    NoMentorsAvailable,

    /// A single mentee's assignment could not be written. Writes before it
    /// (`applied` of them) remain in place.
    #[error("Failed to persist assignment for mentee {mentee_id} after {applied} successful writes")]
    PersistenceWriteFailed {
        mentee_id: String,
        applied: u32,
        #[source]
        source: CollaboratorError,
    },

    /// The roster snapshot references a mentor that is not in it.
    #[error("Inconsistent roster snapshot: mentee {mentee_id} references unknown mentor {mentor_id}")]
    InconsistentSnapshot { mentee_id: String, mentor_id: String },

    /// Reading the roster snapshot failed.
    #[error("Failed to read roster snapshot")]
    Roster(#[source] CollaboratorError),

    /// All `applied` writes succeeded but the aggregate notification failed.
    #[error("Failed to emit reassignment notification after {applied} successful writes")]
    Notify {
        applied: u32,
        #[source]
        source: CollaboratorError,
    },
}
