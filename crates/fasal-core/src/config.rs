//! Layered settings for the planner and calendar.
//!
//! Values come from, highest precedence first: command-line flags,
//! environment variables (both resolved by the CLI), a TOML file, and the
//! built-in defaults. The file lives at `$XDG_CONFIG_HOME/fasal/config.toml`
//! unless a path is given explicitly:
//!
//! ```toml
//! api_url = "https://portal.example/api"
//! user_id = "farmer-1"
//! locale = "hi"
//! database_file = "/var/lib/fasal/fasal.db"
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::{
    error::{CalendarError, Result, ResultExt},
    models::Locale,
};

/// User id used when none is configured.
pub const DEFAULT_USER: &str = "local";

const CONFIG_FILE: &str = "config.toml";

/// Settings from one configuration layer. Unset keys defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Portal API root; when set, entries are stored remotely
    pub api_url: Option<String>,
    pub user_id: Option<String>,
    /// Locale code; unknown codes fall back to English
    pub locale: Option<String>,
    /// Offline database file
    pub database_file: Option<PathBuf>,
}

impl Settings {
    /// Loads the settings file.
    ///
    /// An explicit `path` must exist. Without one, the XDG config file is
    /// read if present and defaults are returned otherwise.
    ///
    /// # Errors
    ///
    /// * `CalendarError::FileSystem` - The file cannot be read
    /// * `CalendarError::Configuration` - The file is not valid TOML
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match xdg::BaseDirectories::with_prefix("fasal").find_config_file(CONFIG_FILE) {
                Some(path) => path,
                None => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Reading config from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|e| CalendarError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&contents).with_context(format!("Invalid config file {}", path.display()))
    }

    /// Parses settings from TOML text.
    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Layers `overrides` on top of `self`; any key set in `overrides` wins.
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            api_url: overrides.api_url.or(self.api_url),
            user_id: overrides.user_id.or(self.user_id),
            locale: overrides.locale.or(self.locale),
            database_file: overrides.database_file.or(self.database_file),
        }
    }

    pub fn user_id(&self) -> &str {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_USER)
    }

    pub fn locale(&self) -> Locale {
        self.locale.as_deref().map(Locale::from_code).unwrap_or_default()
    }

    /// The API root, if one is configured and non-blank.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
