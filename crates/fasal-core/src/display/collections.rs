//! Collection wrapper types for displaying planner entries.

use std::fmt;

use crate::models::PlannerEntry;

/// Newtype wrapper for displaying a list of planner entries.
///
/// Each entry uses its own Display format; an empty list renders a single
/// placeholder line.
///
/// # Examples
///
/// ```rust
/// use fasal_core::display::Entries;
///
/// assert_eq!(Entries(vec![]).to_string(), "No activities scheduled.\n");
/// ```
pub struct Entries(pub Vec<PlannerEntry>);

impl fmt::Display for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No activities scheduled.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::EntryId;

    fn create_test_entry(id: &str, completed: bool) -> PlannerEntry {
        PlannerEntry {
            id: EntryId::from(id),
            user_id: "farmer-1".to_string(),
            crop_name: "Rice".to_string(),
            activity: "Irrigation".to_string(),
            scheduled_date: date(2025, 7, 12),
            notes: Some("North field".to_string()),
            completed,
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_entries_display_multiple() {
        let entries = Entries(vec![create_test_entry("a", false), create_test_entry("b", true)]);
        let output = entries.to_string();

        assert_eq!(output.matches("### 💧 Irrigation: Rice").count(), 2);
        assert!(output.contains("○ Pending"));
        assert!(output.contains("✓ Completed"));
        assert!(output.contains("- **Scheduled**: 2025-07-12"));
        assert!(output.contains("North field"));
    }

    #[test]
    fn test_entries_display_keeps_order() {
        let mut second = create_test_entry("b", false);
        second.crop_name = "Maize".to_string();
        let output = Entries(vec![create_test_entry("a", false), second]).to_string();

        let rice = output.find("Irrigation: Rice").unwrap();
        let maize = output.find("Irrigation: Maize").unwrap();
        assert!(rice < maize);
        assert!(!output.contains("No activities scheduled."));
    }
}
