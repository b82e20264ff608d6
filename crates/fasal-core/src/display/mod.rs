//! Markdown display wrappers for calendar views and planner results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context a bare model does not carry, such as the
//! locale a view is rendered in or the operation that produced an entry.
//! Everything renders to markdown for the CLI's terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers & View │    │   Formatted     │
//! │ (entries, crops)│───▶│ Types (+locale) │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`calendar`]: Month guide, season cards, annual table, activity menu
//! - [`collections`]: Entry lists
//! - [`results`]: Create, update and delete outcomes
//! - [`status`]: Success and failure notices
//! - [`datetime`]: Timestamp formatting
//!
//! # Examples
//!
//! ```rust
//! use fasal_core::{display::MonthGuide, models::{Locale, Month}};
//!
//! let october = Month::new(10).unwrap();
//! let guide = MonthGuide::new(october, Locale::Hi).to_string();
//! assert!(guide.contains("अक्टूबर"));
//! assert!(guide.contains("गेहूं"));
//! ```

pub mod calendar;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use calendar::{Activities, MatrixTable, MonthGuide, SeasonCards};
pub use collections::Entries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
