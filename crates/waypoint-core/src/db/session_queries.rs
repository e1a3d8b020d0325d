//! Trip session persistence and the active-trip setting.

use jiff::Timestamp;
use log::info;
use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior, params};

use super::{comment_queries::remove_plan_comments, conversion_error, invalid_column};
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::{
        CompletionSet, ItineraryState, PlanItem, PlanKind, Progress, ResolutionRequest, TimeOfDay,
    },
};

const SELECT_SESSION_SQL: &str =
    "SELECT completed_count, pending_resolution FROM sessions WHERE trip_id = ?1";
const SELECT_ITEMS_SQL: &str = "SELECT day, kind, title, description, location, scheduled_time, original_time FROM session_items WHERE trip_id = ?1 ORDER BY position";
const UPSERT_SESSION_SQL: &str = "INSERT INTO sessions (trip_id, completed_count, pending_resolution, started_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) ON CONFLICT(trip_id) DO UPDATE SET completed_count = excluded.completed_count, pending_resolution = excluded.pending_resolution, updated_at = excluded.updated_at";
const DELETE_ITEMS_SQL: &str = "DELETE FROM session_items WHERE trip_id = ?1";
const INSERT_ITEM_SQL: &str = "INSERT INTO session_items (trip_id, position, day, kind, title, description, location, scheduled_time, original_time) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const DELETE_SESSION_SQL: &str = "DELETE FROM sessions WHERE trip_id = ?1";
const SELECT_PROGRESS_SQL: &str = "SELECT s.trip_id, s.completed_count, COUNT(i.position) FROM sessions s LEFT JOIN session_items i ON i.trip_id = s.trip_id GROUP BY s.trip_id ORDER BY s.started_at, s.trip_id";

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str = "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_SETTING_IF_SQL: &str = "DELETE FROM settings WHERE key = ?1 AND value = ?2";
const ACTIVE_TRIP_KEY: &str = "active_trip";

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<PlanItem> {
    let kind = row
        .get::<_, String>(1)?
        .parse::<PlanKind>()
        .map_err(|e| invalid_column(1, e))?;
    let scheduled_time = row
        .get::<_, String>(5)?
        .parse::<TimeOfDay>()
        .map_err(|e| conversion_error(5, e))?;
    let original_time = row
        .get::<_, Option<String>>(6)?
        .map(|time| time.parse::<TimeOfDay>())
        .transpose()
        .map_err(|e| conversion_error(6, e))?;

    Ok(PlanItem {
        day: row.get(0)?,
        kind,
        title: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        scheduled_time,
        original_time,
    })
}

/// Reads a session through any connection or open transaction.
pub(super) fn read_session(conn: &Connection, trip_id: &str) -> Result<Option<ItineraryState>> {
    let header = conn
        .query_row(SELECT_SESSION_SQL, params![trip_id], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?))
        })
        .optional()
        .db_context("Failed to query session")?;
    let Some((completed_count, pending)) = header else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare(SELECT_ITEMS_SQL)
        .db_context("Failed to prepare query")?;
    let items = stmt
        .query_map(params![trip_id], item_from_row)
        .db_context("Failed to query session items")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to read session items")?;

    let pending = pending
        .map(|json| serde_json::from_str::<ResolutionRequest>(&json))
        .transpose()?;
    let completed_count = usize::try_from(completed_count).unwrap_or(0).min(items.len());

    Ok(Some(ItineraryState {
        trip_id: trip_id.to_string(),
        items,
        completed: CompletionSet::prefix(completed_count),
        pending,
    }))
}

/// Replaces the stored session with `state`, keeping its start time.
pub(super) fn write_session(conn: &Connection, state: &ItineraryState) -> Result<()> {
    let pending = state
        .pending
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;
    let now = Timestamp::now().to_string();

    conn.execute(
        UPSERT_SESSION_SQL,
        params![state.trip_id, state.completed.len() as i64, pending, now],
    )
    .db_context("Failed to save session")?;

    conn.execute(DELETE_ITEMS_SQL, params![state.trip_id])
        .db_context("Failed to clear session items")?;

    let mut stmt = conn
        .prepare(INSERT_ITEM_SQL)
        .db_context("Failed to prepare item insert")?;
    for (position, item) in state.items.iter().enumerate() {
        stmt.execute(params![
            state.trip_id,
            position as i64,
            item.day,
            item.kind.as_str(),
            item.title,
            item.description,
            item.location,
            item.scheduled_time.to_string(),
            item.original_time.map(|time| time.to_string()),
        ])
        .db_context("Failed to save session item")?;
    }

    Ok(())
}

fn write_active_trip(conn: &Connection, trip_id: &str) -> Result<()> {
    conn.execute(UPSERT_SETTING_SQL, params![ACTIVE_TRIP_KEY, trip_id])
        .db_context("Failed to set active trip")?;
    Ok(())
}

impl super::Database {
    /// Loads the live itinerary of a started trip.
    pub fn load_session(&self, trip_id: &str) -> Result<Option<ItineraryState>> {
        read_session(&self.connection, trip_id)
    }

    /// Stores `state` as the session of its trip, creating it if needed.
    pub fn save_session(&mut self, state: &ItineraryState) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        write_session(&tx, state)?;
        tx.commit().db_context("Failed to commit transaction")
    }

    /// Starts a trip from `fresh`, or resumes the stored session when the trip
    /// was started before. Either way the trip becomes the active one.
    pub fn start_session(&mut self, fresh: ItineraryState) -> Result<ItineraryState> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let state = match read_session(&tx, &fresh.trip_id)? {
            Some(existing) => {
                info!("Resuming trip '{}'", existing.trip_id);
                existing
            }
            None => {
                info!("Starting trip '{}'", fresh.trip_id);
                write_session(&tx, &fresh)?;
                fresh
            }
        };
        write_active_trip(&tx, &state.trip_id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(state)
    }

    /// Loads a session, applies `operation` to it and stores the result, all
    /// in one transaction. Nothing is written when `operation` fails.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` when the trip has not been started, or whatever
    /// `operation` returns.
    pub fn update_session<T, F>(&mut self, trip_id: &str, operation: F) -> Result<T>
    where
        F: FnOnce(&mut ItineraryState) -> Result<T>,
    {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut state = read_session(&tx, trip_id)?.ok_or_else(|| TripError::SessionNotFound {
            trip_id: trip_id.to_string(),
        })?;
        let outcome = operation(&mut state)?;
        write_session(&tx, &state)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(outcome)
    }

    /// Applies the pending resolution of a session, keeping the late plans in
    /// `keep`, or all of them when `keep` is `None`. Comments on removed plans
    /// are deleted and later comments are renumbered in the same transaction.
    pub fn resolve_session(
        &mut self,
        trip_id: &str,
        keep: Option<&[usize]>,
    ) -> Result<Vec<PlanItem>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut state = read_session(&tx, trip_id)?.ok_or_else(|| TripError::SessionNotFound {
            trip_id: trip_id.to_string(),
        })?;
        let keep: Vec<usize> = match keep {
            Some(keep) => keep.to_vec(),
            None => state
                .pending
                .as_ref()
                .map(|request| request.indices().collect())
                .unwrap_or_default(),
        };
        let dropped: Vec<usize> = state
            .pending
            .as_ref()
            .map(|request| request.indices().filter(|i| !keep.contains(i)).collect())
            .unwrap_or_default();

        let removed = state.resolve(&keep)?;
        for &index in dropped.iter().rev() {
            remove_plan_comments(&tx, trip_id, index)?;
        }
        write_session(&tx, &state)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(removed)
    }

    /// Deletes a session together with its items and comments. Clears the
    /// active trip if it pointed at this session.
    ///
    /// Returns `false` if the trip had no session.
    pub fn delete_session(&mut self, trip_id: &str) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let deleted = tx
            .execute(DELETE_SESSION_SQL, params![trip_id])
            .db_context("Failed to delete session")?;
        tx.execute(DELETE_SETTING_IF_SQL, params![ACTIVE_TRIP_KEY, trip_id])
            .db_context("Failed to clear active trip")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }

    /// Progress of every started trip, oldest session first.
    pub fn list_session_progress(&self) -> Result<Vec<(String, Progress)>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROGRESS_SQL)
            .db_context("Failed to prepare query")?;

        let progress = stmt
            .query_map([], |row| {
                let completed = row.get::<_, i64>(1)?;
                let total = row.get::<_, i64>(2)?;
                Ok((
                    row.get::<_, String>(0)?,
                    Progress {
                        total: total as usize,
                        completed: completed.min(total) as usize,
                    },
                ))
            })
            .db_context("Failed to query session progress")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read session progress")?;

        Ok(progress)
    }

    /// The trip selected by the last `start_session`, if any.
    pub fn active_trip(&self) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![ACTIVE_TRIP_KEY], |row| row.get(0))
            .optional()
            .db_context("Failed to query active trip")
    }
}
