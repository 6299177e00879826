//! Service layer over the roster database.
//!
//! `MentoraService` wraps `MentoraDb`. All repo methods are implemented as
//! `impl MentoraService` blocks in [`crate::repos`].

use crate::MentoraDb;
use crate::error::DatabaseError;

pub struct MentoraService {
    db: MentoraDb,
}

impl MentoraService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = MentoraDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_db(db: MentoraDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MentoraDb {
        &self.db
    }
}
