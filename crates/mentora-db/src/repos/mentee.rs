//! Mentee repository.
//!
//! `assign_mentor` is the single mutation path for `mentees.mentor_id`. It
//! refuses inactive or unknown mentors so the stored roster never points a
//! mentee at a mentor who cannot take it.

use chrono::Utc;
use mentora_core::Semester;
use mentora_core::entities::Mentee;
use mentora_core::ids::PREFIX_MENTEE;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::helpers::{get_bool, get_opt_string, get_semester, parse_datetime};
use crate::service::MentoraService;
use crate::updates::mentee::MenteeUpdate;

const SELECT_COLS: &str =
    "id, name, enrollment_no, semester, mentor_id, active, created_at, updated_at";

fn row_to_mentee(row: &libsql::Row) -> Result<Mentee, DatabaseError> {
    Ok(Mentee {
        id: row.get(0)?,
        name: row.get(1)?,
        enrollment_no: row.get(2)?,
        semester: get_semester(row, 3)?,
        mentor_id: get_opt_string(row, 4)?,
        active: get_bool(row, 5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
        updated_at: parse_datetime(&row.get::<String>(7)?)?,
    })
}

/// Input for creating a mentee, also the record shape of an import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMentee {
    pub name: String,
    pub enrollment_no: String,
    pub semester: Semester,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentor_id: Option<String>,
}

/// Filter criteria for mentee listings.
#[derive(Debug, Default)]
pub struct MenteeFilter {
    pub active: Option<bool>,
    pub mentor_id: Option<String>,
    /// Only mentees with no mentor.
    pub unassigned: bool,
    pub semester: Option<Semester>,
    /// `None` returns every match.
    pub limit: Option<u32>,
}

fn validate_new(new: &NewMentee) -> Result<(), DatabaseError> {
    if new.name.trim().is_empty() {
        return Err(DatabaseError::InvalidState(
            "mentee name must not be empty".into(),
        ));
    }
    if new.enrollment_no.trim().is_empty() {
        return Err(DatabaseError::InvalidState(
            "enrollment number must not be empty".into(),
        ));
    }
    Ok(())
}

fn map_unique(error: libsql::Error, enrollment_no: &str) -> DatabaseError {
    if error.to_string().contains("UNIQUE constraint failed") {
        DatabaseError::InvalidState(format!("enrollment number {enrollment_no} already exists"))
    } else {
        DatabaseError::LibSql(error)
    }
}

impl MentoraService {
    async fn ensure_active_mentor(&self, mentor_id: &str) -> Result<(), DatabaseError> {
        match self.get_mentor(mentor_id).await {
            Ok(mentor) if mentor.active => Ok(()),
            Ok(_) => Err(DatabaseError::InvalidState(format!(
                "mentor {mentor_id} is inactive"
            ))),
            Err(DatabaseError::NoResult) => Err(DatabaseError::InvalidState(format!(
                "mentor {mentor_id} does not exist"
            ))),
            Err(e) => Err(e),
        }
    }

    async fn insert_mentee(
        &self,
        conn: &libsql::Connection,
        new: &NewMentee,
    ) -> Result<Mentee, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_MENTEE).await?;
        let name = new.name.trim();
        let enrollment_no = new.enrollment_no.trim();

        conn.execute(
            "INSERT INTO mentees (id, name, enrollment_no, semester, mentor_id, active, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 1, ?6, ?7)",
            libsql::params![
                id.as_str(),
                name,
                enrollment_no,
                i64::from(new.semester.get()),
                new.mentor_id.as_deref(),
                now.to_rfc3339(),
                now.to_rfc3339()
            ],
        )
        .await
        .map_err(|e| map_unique(e, enrollment_no))?;

        Ok(Mentee {
            id,
            name: name.to_string(),
            enrollment_no: enrollment_no.to_string(),
            semester: new.semester,
            mentor_id: new.mentor_id.clone(),
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create one mentee. An explicit `mentor_id` must name an active mentor.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for blank fields, a duplicate
    /// enrollment number, or an unusable mentor.
    pub async fn create_mentee(&self, new: &NewMentee) -> Result<Mentee, DatabaseError> {
        validate_new(new)?;
        if let Some(ref mentor_id) = new.mentor_id {
            self.ensure_active_mentor(mentor_id).await?;
        }
        let mentee = self.insert_mentee(self.db().conn(), new).await?;
        tracing::debug!(mentee = %mentee.id, semester = %mentee.semester, "created mentee");
        Ok(mentee)
    }

    /// Create a batch of mentees atomically. Either every record is inserted
    /// or none is.
    ///
    /// # Errors
    ///
    /// Returns the first validation or INSERT error; the transaction is
    /// rolled back.
    pub async fn import_mentees(&self, batch: &[NewMentee]) -> Result<Vec<Mentee>, DatabaseError> {
        for new in batch {
            validate_new(new)?;
            if let Some(ref mentor_id) = new.mentor_id {
                self.ensure_active_mentor(mentor_id).await?;
            }
        }

        let tx = self.db().conn().transaction().await?;
        let mut created = Vec::with_capacity(batch.len());
        for new in batch {
            match self.insert_mentee(&tx, new).await {
                Ok(mentee) => created.push(mentee),
                Err(e) => {
                    tx.rollback().await?;
                    return Err(e);
                }
            }
        }
        tx.commit().await?;

        tracing::info!(count = created.len(), "imported mentees");
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no mentee has this id.
    pub async fn get_mentee(&self, id: &str) -> Result<Mentee, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM mentees WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_mentee(&row)
    }

    /// Mentees matching `filter`, ordered by semester then enrollment number.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_mentees(&self, filter: &MenteeFilter) -> Result<Vec<Mentee>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(active) = filter.active {
            params.push(i64::from(active).into());
            conditions.push(format!("active = ?{}", params.len()));
        }
        if let Some(ref mentor_id) = filter.mentor_id {
            params.push(libsql::Value::Text(mentor_id.clone()));
            conditions.push(format!("mentor_id = ?{}", params.len()));
        }
        if filter.unassigned {
            conditions.push("mentor_id IS NULL".to_string());
        }
        if let Some(semester) = filter.semester {
            params.push(i64::from(semester.get()).into());
            conditions.push(format!("semester = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit_clause = filter
            .limit
            .map_or_else(String::new, |limit| format!("LIMIT {limit}"));

        let sql = format!(
            "SELECT {SELECT_COLS} FROM mentees {where_clause}
             ORDER BY semester, enrollment_no {limit_clause}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut mentees = Vec::new();
        while let Some(row) = rows.next().await? {
            mentees.push(row_to_mentee(&row)?);
        }
        Ok(mentees)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the mentee does not exist, or
    /// `DatabaseError::InvalidState` for blank fields or a duplicate
    /// enrollment number.
    pub async fn update_mentee(
        &self,
        mentee_id: &str,
        update: MenteeUpdate,
    ) -> Result<Mentee, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(DatabaseError::InvalidState(
                    "mentee name must not be empty".into(),
                ));
            }
            params.push(name.into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(ref enrollment_no) = update.enrollment_no {
            let enrollment_no = enrollment_no.trim();
            if enrollment_no.is_empty() {
                return Err(DatabaseError::InvalidState(
                    "enrollment number must not be empty".into(),
                ));
            }
            params.push(enrollment_no.into());
            sets.push(format!("enrollment_no = ?{}", params.len()));
        }
        if let Some(semester) = update.semester {
            params.push(i64::from(semester.get()).into());
            sets.push(format!("semester = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_mentee(mentee_id).await;
        }

        params.push(Utc::now().to_rfc3339().into());
        sets.push(format!("updated_at = ?{}", params.len()));
        params.push(mentee_id.into());
        let sql = format!(
            "UPDATE mentees SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        let enrollment_no = update.enrollment_no.as_deref().unwrap_or_default();
        let changed = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(|e| map_unique(e, enrollment_no))?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_mentee(mentee_id).await
    }

    /// Point a mentee at `mentor_id`, or clear the pointer with `None`.
    ///
    /// Writing the same value twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if `mentor_id` names an
    /// inactive or unknown mentor, and `DatabaseError::NoResult` if the
    /// mentee does not exist.
    pub async fn assign_mentor(
        &self,
        mentee_id: &str,
        mentor_id: Option<&str>,
    ) -> Result<Mentee, DatabaseError> {
        if let Some(mentor_id) = mentor_id {
            self.ensure_active_mentor(mentor_id).await?;
        }

        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE mentees SET mentor_id = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![mentor_id, Utc::now().to_rfc3339(), mentee_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(mentee = %mentee_id, mentor = ?mentor_id, "mentee assignment written");
        self.get_mentee(mentee_id).await
    }

    /// Flip the active flag. Inactive mentees keep their mentor pointer but
    /// no longer count toward any load.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the mentee does not exist.
    pub async fn set_mentee_active(
        &self,
        mentee_id: &str,
        active: bool,
    ) -> Result<Mentee, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE mentees SET active = ?1, updated_at = ?2 WHERE id = ?3",
                libsql::params![i64::from(active), Utc::now().to_rfc3339(), mentee_id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_mentee(mentee_id).await
    }
}
