//! Planner entry CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type};
use uuid::Uuid;

use crate::{
    error::{CalendarError, DatabaseResultExt, Result},
    models::{EntryId, PlannerEntry},
    params::NewEntry,
};

const INSERT_ENTRY_SQL: &str = "INSERT INTO crop_calendar (id, user_id, crop_name, activity, scheduled_date, notes, completed, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)";
const SELECT_ENTRIES_BY_USER_SQL: &str = "SELECT id, user_id, crop_name, activity, scheduled_date, notes, completed, created_at FROM crop_calendar WHERE user_id = ?1 ORDER BY rowid";
const SELECT_ENTRY_BY_ID_SQL: &str = "SELECT id, user_id, crop_name, activity, scheduled_date, notes, completed, created_at FROM crop_calendar WHERE id = ?1";
const UPDATE_COMPLETED_SQL: &str = "UPDATE crop_calendar SET completed = ?1 WHERE id = ?2";
const DELETE_ENTRY_SQL: &str = "DELETE FROM crop_calendar WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a PlannerEntry from a database row
    fn build_entry_from_row(row: &rusqlite::Row) -> rusqlite::Result<PlannerEntry> {
        let scheduled_date = row.get::<_, String>(4)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?;
        let created_at = row
            .get::<_, String>(7)?
            .parse::<Timestamp>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e)))?;

        Ok(PlannerEntry {
            id: EntryId(row.get(0)?),
            user_id: row.get(1)?,
            crop_name: row.get(2)?,
            activity: row.get(3)?,
            scheduled_date,
            notes: row.get(5)?,
            completed: row.get(6)?,
            created_at,
        })
    }

    /// Inserts a new pending entry, assigning it a fresh id.
    pub fn insert_entry(&mut self, entry: &NewEntry) -> Result<PlannerEntry> {
        let id = Uuid::new_v4().to_string();
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_ENTRY_SQL,
                params![
                    &id,
                    &entry.user_id,
                    &entry.crop_name,
                    &entry.activity,
                    entry.scheduled_date.to_string(),
                    entry.notes.as_deref(),
                    now.to_string()
                ],
            )
            .db_context("Failed to insert entry")?;

        Ok(PlannerEntry {
            id: EntryId(id),
            user_id: entry.user_id.clone(),
            crop_name: entry.crop_name.clone(),
            activity: entry.activity.clone(),
            scheduled_date: entry.scheduled_date,
            notes: entry.notes.clone(),
            completed: false,
            created_at: now,
        })
    }

    /// Lists a user's entries in insertion order.
    pub fn list_entries(&self, user_id: &str) -> Result<Vec<PlannerEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ENTRIES_BY_USER_SQL)
            .db_context("Failed to prepare entry query")?;

        let entries = stmt
            .query_map(params![user_id], Self::build_entry_from_row)
            .db_context("Failed to query entries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read entry row")?;

        Ok(entries)
    }

    /// Retrieves a single entry by its ID.
    pub fn get_entry(&self, id: &EntryId) -> Result<Option<PlannerEntry>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ENTRY_BY_ID_SQL)
            .db_context("Failed to prepare entry query")?;

        let mut rows = stmt
            .query_map(params![id.as_str()], Self::build_entry_from_row)
            .db_context("Failed to query entry")?;

        rows.next()
            .transpose()
            .db_context("Failed to read entry row")
    }

    /// Sets the completion flag. Last write wins.
    pub fn set_completed(&mut self, id: &EntryId, completed: bool) -> Result<()> {
        let updated = self
            .connection
            .execute(UPDATE_COMPLETED_SQL, params![completed, id.as_str()])
            .db_context("Failed to update entry")?;

        if updated == 0 {
            return Err(CalendarError::EntryNotFound { id: id.to_string() });
        }
        Ok(())
    }

    /// Removes an entry permanently.
    pub fn delete_entry(&mut self, id: &EntryId) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_ENTRY_SQL, params![id.as_str()])
            .db_context("Failed to delete entry")?;

        if deleted == 0 {
            return Err(CalendarError::EntryNotFound { id: id.to_string() });
        }
        Ok(())
    }
}
