//! Offline entry store backed by SQLite.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::task;

use super::EntryStore;
use crate::{
    db::Database,
    error::{CalendarError, Result},
    models::{EntryId, PlannerEntry},
    params::NewEntry,
};

/// Entry store persisting to a local SQLite file.
///
/// The connection is opened per operation on the blocking pool, so the store
/// itself holds nothing but the path.
#[derive(Debug, Clone)]
pub struct LocalStore {
    db_path: PathBuf,
}

impl LocalStore {
    /// Opens (and if needed creates) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::Database` if the schema cannot be initialized
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        let init_path = db_path.clone();

        run_blocking(move || Database::new(&init_path).map(|_| ())).await?;
        Ok(Self { db_path })
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| CalendarError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}

#[async_trait]
impl EntryStore for LocalStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn list(&self, user_id: &str) -> Result<Vec<PlannerEntry>> {
        let db_path = self.db_path.clone();
        let user_id = user_id.to_string();

        debug!("Listing entries for {user_id} from {}", db_path.display());
        run_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_entries(&user_id)
        })
        .await
    }

    async fn create(&self, entry: &NewEntry) -> Result<PlannerEntry> {
        let db_path = self.db_path.clone();
        let entry = entry.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.insert_entry(&entry)
        })
        .await
    }

    async fn set_completed(&self, id: &EntryId, completed: bool) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_completed(&id, completed)
        })
        .await
    }

    async fn delete(&self, id: &EntryId) -> Result<()> {
        let db_path = self.db_path.clone();
        let id = id.clone();

        run_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_entry(&id)
        })
        .await
    }
}
