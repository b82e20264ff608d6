//! Entry storage backends.
//!
//! The planner never talks to a database or the portal directly; it goes
//! through an [`EntryStore`]. Two implementations ship with the crate:
//!
//! - [`RestStore`]: the portal's `/crop-calendar` HTTP endpoints
//! - [`LocalStore`]: an on-disk SQLite file for offline use
//!
//! Both honour the same contract. Ids are assigned by the store on create,
//! listings are scoped to one user, and an update or delete of an unknown id
//! fails with [`CalendarError::EntryNotFound`](crate::CalendarError::EntryNotFound).

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{EntryId, PlannerEntry},
    params::NewEntry,
};

mod local;
mod rest;

pub use local::LocalStore;
pub use rest::RestStore;

/// Persistence collaborator for planner entries.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Short backend name for logging
    fn name(&self) -> &str;

    /// All entries owned by `user_id`.
    async fn list(&self, user_id: &str) -> Result<Vec<PlannerEntry>>;

    /// Persist a new entry and return it with its assigned id.
    async fn create(&self, entry: &NewEntry) -> Result<PlannerEntry>;

    /// Set the completion flag of an existing entry.
    async fn set_completed(&self, id: &EntryId, completed: bool) -> Result<()>;

    /// Remove an entry permanently.
    async fn delete(&self, id: &EntryId) -> Result<()>;
}
