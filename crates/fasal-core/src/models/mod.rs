//! Data models for the planting calendar and the personal planner.
//!
//! The calendar side ([`SeasonDefinition`], [`CropDefinition`], [`Month`],
//! [`LocalizedText`]) is static data compiled into the crate. The planner
//! side ([`PlannerEntry`], [`EntryStatus`]) mirrors the shapes exchanged with
//! the backend collaborator. Display implementations live in
//! [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use fasal_core::models::{EntryId, EntryStatus, PlannerEntry};
//! use jiff::{civil::date, Timestamp};
//!
//! let entry = PlannerEntry {
//!     id: EntryId::from("1"),
//!     user_id: "farmer-1".to_string(),
//!     crop_name: "Wheat".to_string(),
//!     activity: "Sowing".to_string(),
//!     scheduled_date: date(2025, 10, 15),
//!     notes: None,
//!     completed: false,
//!     created_at: Timestamp::UNIX_EPOCH,
//! };
//! assert_eq!(entry.status(), EntryStatus::Pending);
//! println!("{}", entry); // ○ Pending, with the activity icon
//! ```

pub mod activity;
pub mod entry;
pub mod locale;
pub mod month;
pub mod season;


pub use activity::Activity;
pub use entry::{EntryId, EntryStatus, PlannerEntry};
pub use locale::{Locale, LocalizedText};
pub use month::Month;
pub use season::{CropDefinition, SeasonDefinition, SeasonId};
