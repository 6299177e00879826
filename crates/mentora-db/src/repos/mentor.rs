//! Mentor repository.
//!
//! Deleting a mentor nulls `mentor_id` on its remaining mentees through the
//! foreign key. Callers that want those mentees redistributed run the
//! engine's rebalance before the delete.

use chrono::Utc;
use mentora_core::entities::Mentor;
use mentora_core::ids::PREFIX_MENTOR;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, parse_datetime};
use crate::service::MentoraService;
use crate::updates::mentor::MentorUpdate;

const SELECT_COLS: &str = "id, name, email, active, created_at, updated_at";

fn row_to_mentor(row: &libsql::Row) -> Result<Mentor, DatabaseError> {
    Ok(Mentor {
        id: row.get(0)?,
        name: row.get(1)?,
        email: get_opt_string(row, 2)?,
        active: get_bool(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Filter criteria for mentor listings.
#[derive(Debug, Default)]
pub struct MentorFilter {
    pub active: Option<bool>,
    /// `None` returns every match.
    pub limit: Option<u32>,
}

impl MentoraService {
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for a blank name, or
    /// `DatabaseError` if the INSERT fails.
    pub async fn create_mentor(
        &self,
        name: &str,
        email: Option<&str>,
    ) -> Result<Mentor, DatabaseError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DatabaseError::InvalidState(
                "mentor name must not be empty".into(),
            ));
        }

        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MENTOR).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO mentors (id, name, email, active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, 1, ?4, ?5)",
                libsql::params![id.as_str(), name, email, now.to_rfc3339(), now.to_rfc3339()],
            )
            .await?;

        tracing::debug!(mentor = %id, "created mentor");
        Ok(Mentor {
            id,
            name: name.to_string(),
            email: email.map(String::from),
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no mentor has this id.
    pub async fn get_mentor(&self, id: &str) -> Result<Mentor, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM mentors WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_mentor(&row)
    }

    /// Mentors ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_mentors(&self, filter: &MentorFilter) -> Result<Vec<Mentor>, DatabaseError> {
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut where_clause = String::new();
        if let Some(active) = filter.active {
            params.push(i64::from(active).into());
            where_clause = format!("WHERE active = ?{}", params.len());
        }
        let limit_clause = filter
            .limit
            .map_or_else(String::new, |limit| format!("LIMIT {limit}"));

        let sql = format!(
            "SELECT {SELECT_COLS} FROM mentors {where_clause} ORDER BY id {limit_clause}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut mentors = Vec::new();
        while let Some(row) = rows.next().await? {
            mentors.push(row_to_mentor(&row)?);
        }
        Ok(mentors)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the mentor does not exist, or
    /// `DatabaseError::InvalidState` if the new name is blank.
    pub async fn update_mentor(
        &self,
        mentor_id: &str,
        update: MentorUpdate,
    ) -> Result<Mentor, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DatabaseError::InvalidState(
                    "mentor name must not be empty".into(),
                ));
            }
            params.push(name.into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(ref email) = update.email {
            params.push(email.clone().map_or(libsql::Value::Null, Into::into));
            sets.push(format!("email = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_mentor(mentor_id).await;
        }

        params.push(Utc::now().to_rfc3339().into());
        sets.push(format!("updated_at = ?{}", params.len()));
        params.push(mentor_id.into());
        let sql = format!(
            "UPDATE mentors SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_mentor(mentor_id).await
    }

    /// Flip the active flag. Deactivating does not touch mentees; the engine
    /// redistributes them.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the mentor does not exist.
    pub async fn set_mentor_active(
        &self,
        mentor_id: &str,
        active: bool,
    ) -> Result<Mentor, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE mentors SET active = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![i64::from(active), Utc::now().to_rfc3339(), mentor_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(mentor = %mentor_id, active, "mentor active flag changed");
        self.get_mentor(mentor_id).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the mentor does not exist.
    pub async fn delete_mentor(&self, mentor_id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM mentors WHERE id = ?1", [mentor_id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(mentor = %mentor_id, "deleted mentor");
        Ok(())
    }
}
