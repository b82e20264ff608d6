//! Parameter structures for planner operations.
//!
//! These are interface-agnostic: the CLI wraps them with clap derives and
//! converts via `From`, while [`NewEntry`] doubles as the JSON body sent to
//! the backend collaborator on create.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   EntryStore    │
//! │  (clap derives) │───▶│  (validation)   │───▶│ (REST / SQLite) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{error::CalendarError, models::EntryId, Result};

/// Message shown when a required planner field is left blank.
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill all required fields";

/// Parameters for scheduling a new activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEntry {
    /// Crop the activity is for (required, free text)
    pub crop_name: String,
    /// Activity label (required, free text or vocabulary label)
    pub activity: String,
    /// Day to schedule the activity on
    pub scheduled_date: Date,
    /// Optional notes; blank notes are dropped
    #[serde(default)]
    pub notes: Option<String>,
}

impl AddEntry {
    /// Reject blank required fields.
    ///
    /// # Errors
    ///
    /// * `CalendarError::InvalidInput` - When `crop_name` or `activity` is
    ///   empty or whitespace only
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fasal_core::params::AddEntry;
    /// use jiff::civil::date;
    ///
    /// let params = AddEntry {
    ///     crop_name: "  ".to_string(),
    ///     activity: "Sowing".to_string(),
    ///     scheduled_date: date(2025, 10, 15),
    ///     notes: None,
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.crop_name.trim().is_empty() {
            return Err(CalendarError::invalid_input("crop_name").with_reason(REQUIRED_FIELDS_NOTICE));
        }
        if self.activity.trim().is_empty() {
            return Err(CalendarError::invalid_input("activity").with_reason(REQUIRED_FIELDS_NOTICE));
        }
        Ok(())
    }

    /// Validate and bind to the owning user, producing the create request.
    pub fn into_new_entry(self, user_id: &str) -> Result<NewEntry> {
        self.validate()?;
        Ok(NewEntry {
            user_id: user_id.to_string(),
            crop_name: self.crop_name.trim().to_string(),
            activity: self.activity.trim().to_string(),
            scheduled_date: self.scheduled_date,
            notes: self
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

/// Create request as transmitted to the entry store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    pub user_id: String,
    pub crop_name: String,
    pub activity: String,
    /// Serialized as `YYYY-MM-DD`
    pub scheduled_date: Date,
    pub notes: Option<String>,
}

/// Parameters for flipping an entry's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleEntry {
    pub id: EntryId,
    /// Completion state the caller last saw
    pub completed: bool,
}

/// Parameters for operations requiring just an entry ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRef {
    pub id: EntryId,
}

/// Parameters for the upcoming-activities summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Upcoming {
    pub limit: usize,
}

impl Default for Upcoming {
    /// The dashboard widget shows five activities.
    fn default() -> Self {
        Self { limit: 5 }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn params(crop: &str, activity: &str) -> AddEntry {
        AddEntry {
            crop_name: crop.to_string(),
            activity: activity.to_string(),
            scheduled_date: date(2025, 10, 15),
            notes: None,
        }
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        assert!(params("Wheat", "Sowing").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_crop_name() {
        match params("", "Sowing").validate().unwrap_err() {
            CalendarError::InvalidInput { field, reason } => {
                assert_eq!(field, "crop_name");
                assert_eq!(reason, REQUIRED_FIELDS_NOTICE);
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_blank_activity() {
        match params("Wheat", "   ").validate().unwrap_err() {
            CalendarError::InvalidInput { field, .. } => assert_eq!(field, "activity"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_into_new_entry_trims_and_drops_blank_notes() {
        let mut add = params("  Wheat ", " Sowing");
        add.notes = Some("   ".to_string());

        let entry = add.into_new_entry("farmer-1").expect("valid params");
        assert_eq!(entry.user_id, "farmer-1");
        assert_eq!(entry.crop_name, "Wheat");
        assert_eq!(entry.activity, "Sowing");
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_new_entry_wire_format() {
        let mut add = params("Rice", "Irrigation");
        add.notes = Some("Field 2".to_string());
        let entry = add.into_new_entry("farmer-1").expect("valid params");

        let json = serde_json::to_value(&entry).expect("serializes");
        assert_eq!(json["user_id"], "farmer-1");
        assert_eq!(json["scheduled_date"], "2025-10-15");
        assert_eq!(json["notes"], "Field 2");
    }

    #[test]
    fn test_upcoming_default_limit() {
        assert_eq!(Upcoming::default().limit, 5);
    }
}
