//! High-level planner API for a user's scheduled farming activities.
//!
//! The [`Planner`] binds one user id to an [`EntryStore`] and keeps a session
//! cache of that user's entries. Every mutation is awaited against the store
//! first and the cache is re-fetched afterwards, so the cache only ever holds
//! what the store last reported.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Planner     │    │   EntryStore    │    │     Backend     │
//! │ (validation,    │───▶│ (RestStore,     │───▶│ (portal API or  │
//! │  session cache) │    │  LocalStore)    │    │  SQLite file)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Entries move Pending ⇄ Completed by toggling; deletion is final.
//!
//! # Examples
//!
//! ```rust
//! use fasal_core::{params::AddEntry, PlannerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_user("farmer-1")
//!     .with_database_path(Some("planner.db"))
//!     .build()
//!     .await?;
//!
//! let entry = planner
//!     .add_entry(&AddEntry {
//!         crop_name: "Wheat".to_string(),
//!         activity: "Sowing".to_string(),
//!         scheduled_date: date(2025, 10, 15),
//!         notes: None,
//!     })
//!     .await?;
//! assert!(!entry.completed);
//! # Ok(())
//! # }
//! ```

use tokio::sync::RwLock;

use crate::{models::PlannerEntry, store::EntryStore};

pub mod builder;
mod entry_ops;


pub use builder::PlannerBuilder;
pub use entry_ops::upcoming;

/// Main planner interface for one user's crop calendar.
pub struct Planner {
    store: Box<dyn EntryStore>,
    user_id: String,
    cache: RwLock<Vec<PlannerEntry>>,
}

impl Planner {
    /// Creates a planner over an arbitrary store. The cache starts empty
    /// until the first [`list_entries`](Self::list_entries).
    pub fn new(store: Box<dyn EntryStore>, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
            cache: RwLock::new(Vec::new()),
        }
    }

    /// The user every store call is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn store_name(&self) -> &str {
        self.store.name()
    }
}
