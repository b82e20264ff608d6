//! Planner entry operations.

use std::collections::BTreeSet;

use jiff::civil::Date;
use log::{debug, trace, warn};

use super::Planner;
use crate::{
    error::{CalendarError, Result},
    models::PlannerEntry,
    params::{AddEntry, EntryRef, ToggleEntry},
};

impl Planner {
    /// Fetches the user's entries from the store and replaces the cache.
    ///
    /// On failure the previous cache is kept.
    pub async fn list_entries(&self) -> Result<Vec<PlannerEntry>> {
        debug!("Loading entries for {} via {}", self.user_id, self.store.name());
        let entries = self.store.list(&self.user_id).await.inspect_err(|e| {
            warn!("Failed to load entries for {}: {e}", self.user_id);
        })?;

        let mut cache = self.cache.write().await;
        trace!("Cache refreshed with {} entries", entries.len());
        cache.clone_from(&entries);
        Ok(entries)
    }

    /// Schedules a new activity for the planner's user.
    ///
    /// # Errors
    ///
    /// * `CalendarError::InvalidInput` - Crop name or activity is blank; no
    ///   store call is made
    /// * Any store error from the create. A failed refresh afterwards is
    ///   logged and leaves the previous cache in place.
    pub async fn add_entry(&self, params: &AddEntry) -> Result<PlannerEntry> {
        let new_entry = params.clone().into_new_entry(&self.user_id)?;

        debug!(
            "Adding {} for {} on {}",
            new_entry.activity, new_entry.crop_name, new_entry.scheduled_date
        );
        let created = self.store.create(&new_entry).await?;
        self.refresh_after_write().await;
        Ok(created)
    }

    /// Flips the completion flag the caller last saw and returns the entry as
    /// re-read from the store. Concurrent toggles resolve last write wins.
    ///
    /// If the re-read fails after the update went through, the cached entry
    /// is returned with the flag that was sent.
    ///
    /// # Errors
    ///
    /// * `CalendarError::EntryNotFound` - The entry no longer exists
    pub async fn toggle_completion(&self, params: &ToggleEntry) -> Result<PlannerEntry> {
        let completed = !params.completed;
        debug!("Setting entry {} completed={completed}", params.id);

        self.store.set_completed(&params.id, completed).await?;

        let found = match self.list_entries().await {
            Ok(entries) => entries.into_iter().find(|entry| entry.id == params.id),
            Err(e) => {
                warn!("Entry {} updated but refresh failed: {e}", params.id);
                let cache = self.cache.read().await;
                let cached = cache.iter().find(|entry| entry.id == params.id).cloned();
                match cached {
                    Some(mut entry) => {
                        entry.completed = completed;
                        Some(entry)
                    }
                    None => return Err(e),
                }
            }
        };

        found.ok_or_else(|| CalendarError::EntryNotFound {
            id: params.id.to_string(),
        })
    }

    /// Removes an entry. There is no undo.
    pub async fn delete_entry(&self, params: &EntryRef) -> Result<()> {
        debug!("Deleting entry {}", params.id);
        self.store.delete(&params.id).await?;
        self.refresh_after_write().await;
        Ok(())
    }

    /// Re-fetches after a successful write. The write stands even if this
    /// fails, so the error is only logged.
    async fn refresh_after_write(&self) {
        if let Err(e) = self.list_entries().await {
            warn!("Write succeeded but refresh failed, keeping previous cache: {e}");
        }
    }

    /// Cached entries scheduled exactly on `date`.
    pub async fn entries_for_date(&self, date: Date) -> Vec<PlannerEntry> {
        self.cache
            .read()
            .await
            .iter()
            .filter(|entry| entry.scheduled_date == date)
            .cloned()
            .collect()
    }

    /// Snapshot of the session cache.
    pub async fn cached_entries(&self) -> Vec<PlannerEntry> {
        self.cache.read().await.clone()
    }

    /// Distinct dates carrying at least one cached entry, ascending.
    pub async fn scheduled_dates(&self) -> Vec<Date> {
        self.cache
            .read()
            .await
            .iter()
            .map(|entry| entry.scheduled_date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Pending entries ordered by scheduled date, at most `limit` of them.
///
/// The sort is stable, so entries sharing a date keep their input order.
///
/// ```rust
/// use fasal_core::planner::upcoming;
///
/// assert!(upcoming(&[], 5).is_empty());
/// ```
pub fn upcoming(entries: &[PlannerEntry], limit: usize) -> Vec<PlannerEntry> {
    let mut pending: Vec<PlannerEntry> = entries
        .iter()
        .filter(|entry| !entry.completed)
        .cloned()
        .collect();
    pending.sort_by_key(|entry| entry.scheduled_date);
    pending.truncate(limit);
    pending
}
