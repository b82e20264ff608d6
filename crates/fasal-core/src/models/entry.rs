//! Planner entry model definition and related functionality.

use std::fmt;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Activity;

/// Opaque, backend-assigned identifier of a planner entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled farming activity owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannerEntry {
    /// Identifier assigned by the backend
    pub id: EntryId,

    /// Owning user
    pub user_id: String,

    /// Crop the activity is for (free text)
    pub crop_name: String,

    /// Activity label (free text or a vocabulary label)
    pub activity: String,

    /// Day the activity is scheduled for, serialized as `YYYY-MM-DD`
    pub scheduled_date: Date,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the entry was created (UTC)
    pub created_at: Timestamp,
}

impl PlannerEntry {
    pub fn status(&self) -> EntryStatus {
        EntryStatus::from(self.completed)
    }

    /// Vocabulary activity this entry's free text maps to.
    pub fn activity_kind(&self) -> Activity {
        Activity::classify(&self.activity)
    }
}

/// Completion state of a planner entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Initial state of every new entry
    Pending,

    Completed,
}

impl From<bool> for EntryStatus {
    fn from(completed: bool) -> Self {
        if completed {
            EntryStatus::Completed
        } else {
            EntryStatus::Pending
        }
    }
}

impl EntryStatus {
    /// The state a toggle moves to.
    pub fn toggled(self) -> Self {
        match self {
            EntryStatus::Pending => EntryStatus::Completed,
            EntryStatus::Completed => EntryStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, EntryStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Completed => "completed",
        }
    }

    /// Status with an icon for display.
    ///
    /// ```rust
    /// use fasal_core::models::EntryStatus;
    ///
    /// assert_eq!(EntryStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(EntryStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            EntryStatus::Completed => "✓ Completed",
            EntryStatus::Pending => "○ Pending",
        }
    }
}
