//! SQLite persistence for trip sessions, comments and settings.
//!
//! This is the durable counterpart of the live [`ItineraryState`]: one row
//! per started trip plus its ordered plan items. Operations that change a
//! session run inside a single transaction so a failed engine call leaves the
//! stored itinerary untouched.
//!
//! [`ItineraryState`]: crate::models::ItineraryState

use std::path::Path;

use rusqlite::{Connection, types::Type};

use crate::error::{DatabaseResultExt, Result};

pub mod comment_queries;
pub mod migrations;
pub mod session_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Wraps a column parse failure so it can surface from a row mapper.
pub(crate) fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

/// Like [`conversion_error`] for parsers that report plain strings.
pub(crate) fn invalid_column(column: usize, message: String) -> rusqlite::Error {
    conversion_error(
        column,
        std::io::Error::new(std::io::ErrorKind::InvalidData, message),
    )
}
