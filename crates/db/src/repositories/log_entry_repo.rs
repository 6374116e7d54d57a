//! Repository for the `log_entries` table.

use brainlogger_core::entry::TYPE_TASK;
use brainlogger_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::log_entry::{LogEntry, NewLogEntry};

/// Column list for log_entries queries.
const COLUMNS: &str = "id, user_id, \"timestamp\", entry_type, content, completed_at";

/// Provides insert, lookup and completion for log entries.
pub struct LogEntryRepo;

impl LogEntryRepo {
    /// Insert a new entry, returning the row with its store-assigned id.
    ///
    /// Constraint violations (blank content, non-positive user id, unknown
    /// type) surface as `sqlx::Error::Database`.
    pub async fn create(pool: &PgPool, input: &NewLogEntry) -> Result<LogEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO log_entries (user_id, \"timestamp\", entry_type, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(input.user_id)
            .bind(input.timestamp)
            .bind(input.entry_type.as_str())
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LogEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM log_entries WHERE id = $1");
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every uncompleted task, most recent first.
    pub async fn list_open_tasks(pool: &PgPool) -> Result<Vec<LogEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM log_entries
             WHERE entry_type = $1 AND completed_at IS NULL
             ORDER BY \"timestamp\" DESC, id DESC"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(TYPE_TASK)
            .fetch_all(pool)
            .await
    }

    /// Number of uncompleted tasks.
    pub async fn count_open_tasks(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM log_entries
             WHERE entry_type = $1 AND completed_at IS NULL",
        )
        .bind(TYPE_TASK)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Mark an entry as completed at `now`.
    ///
    /// Completion is one-way: an entry that already has `completed_at` keeps
    /// its original value. Returns `None` if no entry has this id.
    pub async fn mark_complete(
        pool: &PgPool,
        id: DbId,
        now: Timestamp,
    ) -> Result<Option<LogEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE log_entries SET completed_at = COALESCE(completed_at, $2)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LogEntry>(&query)
            .bind(id)
            .bind(now)
            .fetch_optional(pool)
            .await
    }
}
