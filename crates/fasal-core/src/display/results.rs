//! Result wrapper types for displaying planner operation outcomes.

use std::fmt;

use crate::models::PlannerEntry;

/// Outcome of scheduling a new activity.
///
/// # Examples
///
/// ```rust
/// use fasal_core::{display::CreateResult, models::{EntryId, PlannerEntry}};
/// use jiff::{civil::date, Timestamp};
///
/// let entry = PlannerEntry {
///     id: EntryId::from("e1"),
///     user_id: "farmer-1".to_string(),
///     crop_name: "Wheat".to_string(),
///     activity: "Sowing".to_string(),
///     scheduled_date: date(2025, 10, 15),
///     notes: None,
///     completed: false,
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(entry).to_string();
/// assert!(output.starts_with("Activity added successfully (ID: e1)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PlannerEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity added successfully (ID: {})", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of an update, optionally listing what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<PlannerEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated activity {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a deletion.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<PlannerEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} for {} on {} (ID: {})",
            self.resource.activity,
            self.resource.crop_name,
            self.resource.scheduled_date,
            self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::EntryId;

    fn entry(completed: bool) -> PlannerEntry {
        PlannerEntry {
            id: EntryId::from("e7"),
            user_id: "farmer-1".to_string(),
            crop_name: "Cotton".to_string(),
            activity: "Pesticide Application".to_string(),
            scheduled_date: date(2025, 8, 20),
            notes: None,
            completed,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_update_result_lists_changes() {
        let result = UpdateResult::with_changes(
            entry(true),
            vec!["Marked as completed".to_string()],
        );
        let output = result.to_string();
        assert!(output.starts_with("Updated activity e7\n"));
        assert!(output.contains("- Marked as completed"));
        assert!(output.contains("### 🐛 Pesticide Application: Cotton (✓ Completed)"));
    }

    #[test]
    fn test_update_result_without_changes() {
        let output = UpdateResult::with_changes(entry(false), Vec::new()).to_string();
        assert!(!output.contains("Changes made:"));
    }

    #[test]
    fn test_delete_result() {
        assert_eq!(
            DeleteResult::new(entry(false)).to_string(),
            "Deleted Pesticide Application for Cotton on 2025-08-20 (ID: e7)\n"
        );
    }
}
