//! SQLite storage for the offline entry store.
//!
//! This module provides the low-level persistence behind
//! [`crate::store::LocalStore`]. It honours the same contract as the portal
//! backend: ids are assigned on insert, entries are scoped by user id, and
//! updates or deletes of a missing id report
//! [`CalendarError::EntryNotFound`](crate::CalendarError::EntryNotFound).

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod entry_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
