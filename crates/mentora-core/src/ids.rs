//! ID prefix constants.
//!
//! Every persisted entity carries an ID of the form `<prefix>-<8 hex chars>`,
//! e.g. `mtr-a3f8b2c1`. Prefixes keep IDs self-describing in logs and
//! notification messages.

pub const PREFIX_MENTOR: &str = "mtr";
pub const PREFIX_MENTEE: &str = "mte";
pub const PREFIX_NOTIFICATION: &str = "ntf";

/// All prefixes, in declaration order.
pub const ALL_PREFIXES: [&str; 3] = [PREFIX_MENTOR, PREFIX_MENTEE, PREFIX_NOTIFICATION];
