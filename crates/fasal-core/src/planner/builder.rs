//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use log::info;

use super::Planner;
use crate::{
    config::DEFAULT_USER,
    error::{CalendarError, Result},
    store::{EntryStore, LocalStore, RestStore},
};

/// Builder for creating and configuring Planner instances.
///
/// With an API URL the planner talks to the portal backend; otherwise it
/// keeps entries in a local SQLite file.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    user_id: String,
    api_url: Option<String>,
    database_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            user_id: DEFAULT_USER.to_string(),
            api_url: None,
            database_path: None,
        }
    }

    /// Sets the user every store call is scoped to.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Uses the portal backend rooted at `url` instead of the local file.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/fasal/fasal.db` or `~/.local/share/fasal/fasal.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `CalendarError::InvalidInput` if the user id is blank
    /// Returns `CalendarError::Configuration` if the API URL is malformed
    /// Returns `CalendarError::FileSystem` if the database path is invalid
    /// Returns `CalendarError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        if self.user_id.trim().is_empty() {
            return Err(CalendarError::invalid_input("user_id").with_reason("User id must not be empty"));
        }

        let store: Box<dyn EntryStore> = match self.api_url {
            Some(url) => {
                info!("Using portal backend at {url}");
                Box::new(RestStore::new(url)?)
            }
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| CalendarError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                info!("Using offline store at {}", db_path.display());
                Box::new(LocalStore::open(db_path).await?)
            }
        };

        Ok(Planner::new(store, self.user_id))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("fasal")
            .place_data_file("fasal.db")
            .map_err(|e| CalendarError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
