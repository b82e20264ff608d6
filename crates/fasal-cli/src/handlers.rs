//! Command handlers rendering core results through the terminal renderer.

use anyhow::{anyhow, Result};
use fasal_core::{
    display::{Activities, Entries, MatrixTable, MonthGuide, SeasonCards},
    models::{Locale, Month},
    params::{EntryRef, ToggleEntry, Upcoming},
    planner::upcoming,
    seasons, CreateResult, DeleteResult, EntryId, OperationStatus, Planner, UpdateResult,
};
use jiff::{civil::Date, Zoned};
use log::warn;

use crate::{
    cli::{PlanCommands, SeasonCommands},
    renderer::TerminalRenderer,
};

/// Collapse a core error into the user-facing notice for `action`.
fn notice<T>(result: fasal_core::Result<T>, action: &str) -> Result<T> {
    result.map_err(|err| {
        warn!("Failed to {action}: {err}");
        anyhow!(OperationStatus::from_error(&err, action).message)
    })
}

pub fn today() -> Date {
    Zoned::now().date()
}

/// Handlers for the static calendar; these never touch the planner.
pub struct SeasonView {
    locale: Locale,
    renderer: TerminalRenderer,
}

impl SeasonView {
    pub fn new(locale: Locale, renderer: TerminalRenderer) -> Self {
        Self { locale, renderer }
    }

    pub fn handle(&self, command: SeasonCommands) -> Result<()> {
        match command {
            SeasonCommands::Month(args) => {
                let month = match args.month.and_then(Month::new) {
                    Some(month) => month,
                    None => Month::of(today()),
                };
                self.month_guide(month)
            }
            SeasonCommands::List => self
                .renderer
                .render(&SeasonCards { locale: self.locale }.to_string()),
            SeasonCommands::Table(args) => {
                let matrix = match args.per_season {
                    Some(n) => seasons::annual_matrix_condensed(n),
                    None => seasons::annual_matrix(),
                };
                self.renderer.render(
                    &MatrixTable {
                        matrix,
                        locale: self.locale,
                    }
                    .to_string(),
                )
            }
            SeasonCommands::Crops => {
                let list: String = seasons::crop_names()
                    .into_iter()
                    .filter_map(seasons::find_crop)
                    .map(|crop| format!("- {} {}\n", crop.icon, crop.localized_name(self.locale)))
                    .collect();
                self.renderer.render(&list)
            }
        }
    }

    pub fn month_guide(&self, month: Month) -> Result<()> {
        self.renderer
            .render(&MonthGuide::new(month, self.locale).to_string())
    }
}

/// Handlers for the personal planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_entries(args.date).await,
            PlanCommands::Add(args) => {
                let params = args.into_params(today());
                let entry = notice(self.planner.add_entry(&params).await, "add activity")?;
                self.renderer.render(&CreateResult::new(entry).to_string())
            }
            PlanCommands::Toggle(args) => self.toggle_entry(args.into()).await,
            PlanCommands::Delete(args) => self.delete_entry(args.into()).await,
            PlanCommands::Upcoming(args) => self.upcoming(args.into()).await,
            PlanCommands::Activities => self.renderer.render(&Activities.to_string()),
        }
    }

    async fn list_entries(&self, date: Option<Date>) -> Result<()> {
        let entries = notice(self.planner.list_entries().await, "load activities")?;
        let entries = match date {
            Some(date) => self.planner.entries_for_date(date).await,
            None => entries,
        };
        self.renderer.render(&Entries(entries).to_string())
    }

    async fn toggle_entry(&self, id: EntryId) -> Result<()> {
        let entries = notice(self.planner.list_entries().await, "update")?;
        // Unknown ids still go to the store so its not-found error surfaces.
        let completed = entries
            .iter()
            .find(|entry| entry.id == id)
            .is_some_and(|entry| entry.completed);

        let entry = notice(
            self.planner
                .toggle_completion(&ToggleEntry { id, completed })
                .await,
            "update",
        )?;

        let change = if entry.completed {
            "Marked as completed"
        } else {
            "Marked as pending"
        };
        self.renderer
            .render(&UpdateResult::with_changes(entry, vec![change.to_string()]).to_string())
    }

    async fn delete_entry(&self, id: EntryId) -> Result<()> {
        let entries = notice(self.planner.list_entries().await, "delete")?;
        let existing = entries.into_iter().find(|entry| entry.id == id);

        notice(self.planner.delete_entry(&EntryRef { id: id.clone() }).await, "delete")?;

        match existing {
            Some(entry) => self.renderer.render(&DeleteResult::new(entry).to_string()),
            None => self
                .renderer
                .render(&OperationStatus::success(format!("Deleted activity {id}")).to_string()),
        }
    }

    async fn upcoming(&self, params: Upcoming) -> Result<()> {
        let entries = notice(self.planner.list_entries().await, "load activities")?;
        self.renderer
            .render(&Entries(upcoming(&entries, params.limit)).to_string())
    }
}
