//! Core library for the Fasal crop calendar.
//!
//! Two halves live here:
//!
//! - a static seasonal calendar ([`seasons`]) answering which crops are sown
//!   and harvested in a month, with crop and month names in English, Hindi
//!   and Gujarati;
//! - a personal planner ([`planner`]) for scheduling farming activities
//!   against an [`EntryStore`]: the portal's REST backend or an offline
//!   SQLite file.
//!
//! Domain models implement [`std::fmt::Display`] as markdown; the wrappers in
//! [`display`] add locale and operation context for the CLI's renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use fasal_core::{params::AddEntry, seasons, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let october = seasons::crops_for_month(10);
//! println!("Sow now: {:?}", october.sowing_names());
//!
//! let planner = PlannerBuilder::new()
//!     .with_user("farmer-1")
//!     .with_database_path(Some("fasal.db"))
//!     .build()
//!     .await?;
//!
//! let entry = planner
//!     .add_entry(&AddEntry {
//!         crop_name: "Wheat".to_string(),
//!         activity: "Sowing".to_string(),
//!         scheduled_date: date(2025, 10, 15),
//!         notes: Some("Plot B".to_string()),
//!     })
//!     .await?;
//! println!("{entry}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod seasons;
pub mod store;

// Re-export commonly used types
pub use config::Settings;
pub use db::Database;
pub use display::{
    Activities, CreateResult, DeleteResult, Entries, MatrixTable, MonthGuide, OperationStatus,
    SeasonCards, UpdateResult,
};
pub use error::{CalendarError, Result};
pub use models::{
    Activity, EntryId, EntryStatus, Locale, Month, PlannerEntry, SeasonId,
};
pub use params::{AddEntry, EntryRef, NewEntry, ToggleEntry, Upcoming};
pub use planner::{upcoming, Planner, PlannerBuilder};
pub use store::{EntryStore, LocalStore, RestStore};
