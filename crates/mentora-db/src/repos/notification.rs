//! Notification feed repository.
//!
//! `target_roles` is stored as a JSON array of role names.

use chrono::Utc;
use mentora_core::entities::Notification;
use mentora_core::enums::TargetRole;
use mentora_core::ids::PREFIX_NOTIFICATION;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_datetime};
use crate::service::MentoraService;

const SELECT_COLS: &str = "id, message, target_roles, read, created_at";

fn row_to_notification(row: &libsql::Row) -> Result<Notification, DatabaseError> {
    let roles: String = row.get(2)?;
    Ok(Notification {
        id: row.get(0)?,
        message: row.get(1)?,
        target_roles: serde_json::from_str(&roles)
            .map_err(|e| DatabaseError::Query(format!("Invalid target_roles '{roles}': {e}")))?,
        read: get_bool(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

/// Filter criteria for the notification feed.
#[derive(Debug, Default)]
pub struct NotificationFilter {
    pub unread_only: bool,
    pub role: Option<TargetRole>,
    pub limit: Option<u32>,
}

impl MentoraService {
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn create_notification(
        &self,
        message: &str,
        target_roles: &[TargetRole],
    ) -> Result<Notification, DatabaseError> {
        let now = Utc::now();
        let id = self.db().generate_id(PREFIX_NOTIFICATION).await?;
        let roles_json =
            serde_json::to_string(target_roles).map_err(|e| DatabaseError::Other(e.into()))?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO notifications (id, message, target_roles, read, created_at)
                 VALUES (?1, ?2, ?3, 0, ?4)",
                libsql::params![id.as_str(), message, roles_json, now.to_rfc3339()],
            )
            .await?;

        tracing::debug!(notification = %id, "notification stored");
        Ok(Notification {
            id,
            message: message.to_string(),
            target_roles: target_roles.to_vec(),
            read: false,
            created_at: now,
        })
    }

    /// Newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_notifications(
        &self,
        filter: &NotificationFilter,
    ) -> Result<Vec<Notification>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if filter.unread_only {
            conditions.push("read = 0".to_string());
        }
        if let Some(role) = filter.role {
            params.push(libsql::Value::Text(format!("\"{}\"", role.as_str())));
            conditions.push(format!("instr(target_roles, ?{}) > 0", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM notifications {where_clause}
             ORDER BY created_at DESC, id LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut notifications = Vec::new();
        while let Some(row) = rows.next().await? {
            notifications.push(row_to_notification(&row)?);
        }
        Ok(notifications)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the notification does not exist.
    pub async fn mark_notification_read(&self, id: &str) -> Result<Notification, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute("UPDATE notifications SET read = 1 WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM notifications WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_notification(&row)
    }
}
