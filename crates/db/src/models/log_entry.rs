//! Log entry model.

use brainlogger_core::entry::EntryType;
use brainlogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `log_entries` table.
///
/// Serializes as `{id, userId, timestamp, type, content, completedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    #[sqlx(try_from = "String")]
    pub entry_type: EntryType,
    pub content: String,
    pub completed_at: Option<Timestamp>,
}

/// DTO for the append request body.
///
/// Only `userId`, `type` and `content` are read. Any `id`, `timestamp` or
/// `completedAt` sent by the client is dropped during deserialization. A
/// missing `userId` or `content` deserializes to `0` / `""` so it fails
/// validation instead of the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogEntry {
    #[serde(default)]
    pub user_id: DbId,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub content: String,
}

/// A validated entry ready for insert. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub user_id: DbId,
    pub timestamp: Timestamp,
    pub entry_type: EntryType,
    pub content: String,
}

impl NewLogEntry {
    /// Build an insertable entry from a request, stamping it with `now`.
    pub fn from_request(input: CreateLogEntry, now: Timestamp) -> Self {
        Self {
            user_id: input.user_id,
            timestamp: now,
            entry_type: input.entry_type,
            content: input.content,
        }
    }
}
