//! Plan comment storage.

use jiff::Timestamp;
use rusqlite::{Connection, Row, params};

use super::conversion_error;
use crate::{
    error::{DatabaseResultExt, Result, TripError},
    models::Comment,
};

const CHECK_SESSION_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM sessions WHERE trip_id = ?1)";
const COUNT_ITEMS_SQL: &str = "SELECT COUNT(*) FROM session_items WHERE trip_id = ?1";
const INSERT_COMMENT_SQL: &str = "INSERT INTO comments (trip_id, plan_index, rating, content, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_COMMENTS_SQL: &str = "SELECT id, trip_id, plan_index, rating, content, created_at FROM comments WHERE trip_id = ?1 AND plan_index = ?2 ORDER BY id DESC";
const DELETE_PLAN_COMMENTS_SQL: &str =
    "DELETE FROM comments WHERE trip_id = ?1 AND plan_index = ?2";
const SHIFT_COMMENTS_SQL: &str =
    "UPDATE comments SET plan_index = plan_index - 1 WHERE trip_id = ?1 AND plan_index > ?2";

fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get::<_, i64>(0)? as u64,
        trip_id: row.get(1)?,
        plan_index: row.get::<_, i64>(2)? as usize,
        rating: row.get(3)?,
        content: row.get(4)?,
        created_at: row
            .get::<_, String>(5)?
            .parse::<Timestamp>()
            .map_err(|e| conversion_error(5, e))?,
    })
}

/// Drops the comments of the plan at `plan_index` and moves every later
/// comment down one position, mirroring the removal of that plan.
pub(super) fn remove_plan_comments(conn: &Connection, trip_id: &str, plan_index: usize) -> Result<()> {
    conn.execute(DELETE_PLAN_COMMENTS_SQL, params![trip_id, plan_index as i64])
        .db_context("Failed to delete plan comments")?;
    conn.execute(SHIFT_COMMENTS_SQL, params![trip_id, plan_index as i64])
        .db_context("Failed to renumber comments")?;
    Ok(())
}

impl super::Database {
    /// Adds a comment to a plan of a started trip.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` if the trip has not been started, `OutOfRange` if the
    /// itinerary has no plan at `plan_index`.
    pub fn add_comment(
        &mut self,
        trip_id: &str,
        plan_index: usize,
        rating: u8,
        content: &str,
    ) -> Result<Comment> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_SESSION_EXISTS_SQL, params![trip_id], |row| row.get(0))
            .db_context("Failed to check session existence")?;
        if !exists {
            return Err(TripError::SessionNotFound {
                trip_id: trip_id.to_string(),
            });
        }

        let len: i64 = tx
            .query_row(COUNT_ITEMS_SQL, params![trip_id], |row| row.get(0))
            .db_context("Failed to count session items")?;
        let len = len as usize;
        if plan_index >= len {
            return Err(TripError::OutOfRange {
                index: plan_index,
                len,
            });
        }

        let now = Timestamp::now();
        tx.execute(
            INSERT_COMMENT_SQL,
            params![trip_id, plan_index as i64, rating, content, now.to_string()],
        )
        .db_context("Failed to insert comment")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Comment {
            id,
            trip_id: trip_id.to_string(),
            plan_index,
            rating,
            content: content.to_string(),
            created_at: now,
        })
    }

    /// Comments on one plan, newest first.
    pub fn list_comments(&self, trip_id: &str, plan_index: usize) -> Result<Vec<Comment>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMMENTS_SQL)
            .db_context("Failed to prepare query")?;

        let comments = stmt
            .query_map(params![trip_id, plan_index as i64], comment_from_row)
            .db_context("Failed to query comments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to read comments")?;

        Ok(comments)
    }
}
