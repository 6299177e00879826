//! Repository modules implementing CRUD operations for roster entities.
//!
//! Each module adds methods to `MentoraService` via `impl MentoraService`
//! blocks. [`roster`] implements the engine's collaborator traits on top.

pub mod mentee;
pub mod mentor;
pub mod notification;
pub mod roster;
