//! Wire types shared with the API server.

use brainlogger_core::entry::EntryType;
use brainlogger_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// Every capture is attributed to this user until real identities exist.
pub const SINGLE_USER_ID: DbId = 1;

/// An entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub timestamp: Timestamp,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub content: String,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
}

/// Body of `POST /api/log`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogRequest {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub content: String,
    pub user_id: DbId,
}
