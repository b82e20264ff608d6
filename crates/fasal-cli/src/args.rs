use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fasal_core::Settings;

use crate::cli::{PlanCommands, SeasonCommands};

/// Seasonal crop calendar and personal farm planner
///
/// Shows which crops to sow and harvest each month across the Kharif, Rabi
/// and Zaid seasons, and keeps a personal schedule of farming activities
/// either in the portal backend or in a local database file.
#[derive(Parser)]
#[command(version, about, name = "fasal")]
pub struct Args {
    /// Portal API root (e.g. https://portal.example/api). When unset,
    /// activities are kept in the local database file
    #[arg(long, global = true, env = "FASAL_API_URL")]
    pub api_url: Option<String>,

    /// User whose activities are listed and scheduled. Defaults to "local"
    #[arg(long, global = true, env = "FASAL_USER")]
    pub user: Option<String>,

    /// Display language for crop and month names: en, hi or gu
    #[arg(long, global = true, env = "FASAL_LOCALE")]
    pub locale: Option<String>,

    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fasal/fasal.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the config file. Defaults to $XDG_CONFIG_HOME/fasal/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    /// Flag and environment values as the highest-precedence settings layer.
    ///
    /// Blank values count as unset so they never mask the config file.
    pub fn overrides(&self) -> Settings {
        Settings {
            api_url: non_blank(self.api_url.as_deref()),
            user_id: non_blank(self.user.as_deref()),
            locale: non_blank(self.locale.as_deref()),
            database_file: self
                .database_file
                .clone()
                .filter(|path| !path.as_os_str().is_empty()),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Available commands for the Fasal CLI
///
/// - `season`: the static planting calendar
/// - `plan`: the personal activity schedule
///
/// Without a command, the current month's guide is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the planting calendar
    #[command(alias = "s")]
    Season {
        #[command(subcommand)]
        command: SeasonCommands,
    },
    /// Manage scheduled farming activities
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
