//! Command-line argument wrappers.
//!
//! Clap concerns stay here; each wrapper converts into the interface-agnostic
//! parameter type from `fasal_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use clap::{Args, Subcommand};
use fasal_core::{
    models::Activity,
    params::{AddEntry, Upcoming},
    EntryId,
};
use jiff::civil::Date;

#[derive(Subcommand)]
pub enum SeasonCommands {
    /// Crops to sow and harvest in a month
    #[command(alias = "m")]
    Month(MonthArgs),
    /// Season cards with their crops
    #[command(alias = "l")]
    List,
    /// Annual sowing and harvest table
    #[command(alias = "t")]
    Table(TableArgs),
    /// Every crop in the calendar
    Crops,
}

/// Show the guide for one month
#[derive(Args)]
pub struct MonthArgs {
    /// Month number, 1-12. Defaults to the current month
    #[arg(value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,
}

/// Show the annual table
#[derive(Args)]
pub struct TableArgs {
    /// Only the first N crops of each season, as on the dashboard
    #[arg(long)]
    pub per_season: Option<usize>,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List scheduled activities
    #[command(alias = "l")]
    List(ListEntriesArgs),
    /// Schedule a new activity
    #[command(alias = "a")]
    Add(AddEntryArgs),
    /// Flip an activity between pending and completed
    #[command(alias = "t")]
    Toggle(EntryIdArgs),
    /// Delete an activity permanently
    #[command(alias = "d")]
    Delete(EntryIdArgs),
    /// Next pending activities by date
    #[command(alias = "u")]
    Upcoming(UpcomingArgs),
    /// Known activity types
    Activities,
}

/// List activities, optionally for a single day
#[derive(Args)]
pub struct ListEntriesArgs {
    /// Only activities scheduled on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<Date>,
}

/// Schedule a farming activity
#[derive(Args)]
pub struct AddEntryArgs {
    /// Crop the activity is for
    pub crop: String,
    /// Activity type, e.g. sowing, irrigation, or any free text
    pub activity: String,
    /// Date to schedule on (YYYY-MM-DD). Defaults to today
    #[arg(long)]
    pub date: Option<Date>,
    /// Optional notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl AddEntryArgs {
    /// Convert to core parameters. Vocabulary keys such as `pesticide` are
    /// expanded to their label; anything else is kept verbatim.
    pub fn into_params(self, today: Date) -> AddEntry {
        let activity = self
            .activity
            .parse::<Activity>()
            .map(|a| a.label().to_string())
            .unwrap_or(self.activity);

        AddEntry {
            crop_name: self.crop,
            activity,
            scheduled_date: self.date.unwrap_or(today),
            notes: self.notes,
        }
    }
}

/// Identify an existing activity
#[derive(Args)]
pub struct EntryIdArgs {
    #[arg(help = "Identifier of the activity, as shown by `plan list`")]
    pub id: String,
}

impl From<EntryIdArgs> for EntryId {
    fn from(val: EntryIdArgs) -> Self {
        EntryId(val.id)
    }
}

/// Show the next pending activities
#[derive(Args)]
pub struct UpcomingArgs {
    /// Maximum number of activities to show
    #[arg(long, default_value_t = 5)]
    pub limit: usize,
}

impl From<UpcomingArgs> for Upcoming {
    fn from(val: UpcomingArgs) -> Self {
        Upcoming { limit: val.limit }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn args(activity: &str, on: Option<Date>) -> AddEntryArgs {
        AddEntryArgs {
            crop: "Cotton".to_string(),
            activity: activity.to_string(),
            date: on,
            notes: None,
        }
    }

    #[test]
    fn test_vocabulary_key_expands_to_label() {
        let params = args("pesticide", None).into_params(date(2025, 8, 1));
        assert_eq!(params.activity, "Pesticide Application");
        assert_eq!(params.scheduled_date, date(2025, 8, 1));
    }

    #[test]
    fn test_free_text_activity_is_kept() {
        let params = args("Mulching", Some(date(2025, 9, 3))).into_params(date(2025, 8, 1));
        assert_eq!(params.activity, "Mulching");
        assert_eq!(params.scheduled_date, date(2025, 9, 3));
    }
}
