//! Log entry type enumeration and validation rules.
//!
//! The entry type is persisted by its symbolic name (`"Task"`, `"Idea"`, ...)
//! rather than an ordinal, so new types can be added in any position without
//! rewriting stored rows. Names read back from storage are validated against
//! the fixed set.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Stored names for each entry type.
pub const TYPE_TASK: &str = "Task";
pub const TYPE_IDEA: &str = "Idea";
pub const TYPE_NOTE: &str = "Note";
pub const TYPE_WAIT: &str = "Wait";

/// All valid entry type names, in display order.
pub const VALID_ENTRY_TYPES: &[&str] = &[TYPE_TASK, TYPE_IDEA, TYPE_NOTE, TYPE_WAIT];

pub const CONTENT_REQUIRED: &str = "Content is required";
pub const USER_ID_REQUIRED: &str = "UserId is required";

// ---------------------------------------------------------------------------
// Entry type
// ---------------------------------------------------------------------------

/// The kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    Task,
    Idea,
    Note,
    Wait,
}

impl EntryType {
    /// Every variant, in display order.
    pub const ALL: [EntryType; 4] = [Self::Task, Self::Idea, Self::Note, Self::Wait];

    /// Convert from a stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            TYPE_TASK => Ok(Self::Task),
            TYPE_IDEA => Ok(Self::Idea),
            TYPE_NOTE => Ok(Self::Note),
            TYPE_WAIT => Ok(Self::Wait),
            _ => Err(format!(
                "Invalid entry type '{s}'. Must be one of: {}",
                VALID_ENTRY_TYPES.join(", ")
            )),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => TYPE_TASK,
            Self::Idea => TYPE_IDEA,
            Self::Note => TYPE_NOTE,
            Self::Wait => TYPE_WAIT,
        }
    }

    /// Position of this variant within [`EntryType::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::Task => 0,
            Self::Idea => 1,
            Self::Note => 2,
            Self::Wait => 3,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Used by the store to decode the `entry_type` column.
impl TryFrom<String> for EntryType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value).map_err(CoreError::Validation)
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Content must contain at least one non-whitespace character.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err(CONTENT_REQUIRED.to_string());
    }
    Ok(())
}

/// The owning user id must be positive.
pub fn validate_user_id(user_id: DbId) -> Result<(), String> {
    if user_id <= 0 {
        return Err(USER_ID_REQUIRED.to_string());
    }
    Ok(())
}

/// Whether an entry with these fields counts as an open task.
pub fn is_open_task(entry_type: EntryType, completed: bool) -> bool {
    entry_type == EntryType::Task && !completed
}
