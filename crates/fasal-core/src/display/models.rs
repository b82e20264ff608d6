//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Activity, EntryStatus, Locale, Month, PlannerEntry, SeasonId};

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name(Locale::En))
    }
}

impl fmt::Display for PlannerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} {}: {} ({})",
            self.activity_kind().icon(),
            self.activity,
            self.crop_name,
            self.status().with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Scheduled**: {}", self.scheduled_date)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}
