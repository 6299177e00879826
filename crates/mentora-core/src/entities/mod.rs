//! Entity structs for all Mentora domain objects.
//!
//! Each entity maps to a table in the libSQL database (see
//! `mentora-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.
//!
//! A mentor never owns its mentees. The relation lives only in
//! `Mentee::mentor_id` and is resolved by reverse lookup.

mod mentee;
mod mentor;
mod notification;

pub use mentee::Mentee;
pub use mentor::Mentor;
pub use notification::Notification;
