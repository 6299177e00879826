//! # mentora-engine
//!
//! Mentee assignment and rebalancing engine.
//!
//! The engine decides which mentor supervises which mentee and keeps the
//! distribution balanced as mentors leave and new mentees arrive:
//! - [`load_index`] builds per-mentor totals and per-semester counts from a
//!   roster snapshot
//! - [`balanced`] is the greedy, semester-diversity-aware placement
//! - [`strategy`] dispatches a batch to `equal`, `semester`, `balanced`, or
//!   `manual` placement
//! - [`engine::AssignmentEngine`] serializes invocations, reads the roster
//!   once, persists one write per mentee, and emits a single aggregate notice
//!
//! Roster access, persistence, and notification are collaborator traits in
//! [`roster`]; `mentora-db` implements them over libSQL and [`memory`]
//! implements them in-process.

pub mod balanced;
pub mod engine;
pub mod error;
pub mod load_index;
pub mod memory;
pub mod roster;
pub mod strategy;

pub use engine::AssignmentEngine;
pub use error::EngineError;
pub use load_index::{LoadIndex, build_load_index};
pub use roster::{Assignment, AssignmentWriter, ChangeNotice, ChangeNotifier, RosterProvider, RosterSnapshot};
