//! Error types for the itinerary companion library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all itinerary operations.
///
/// Every variant is a locally reported, recoverable condition. Engine
/// operations validate before they mutate, so an `Err` never leaves a
/// partially updated itinerary behind.
#[derive(Error, Debug)]
pub enum TripError {
    /// A plan index that is not present in the itinerary
    #[error("Plan index {index} is out of range (itinerary has {len} plans)")]
    OutOfRange { index: usize, len: usize },
    /// A resolution request that no longer matches the itinerary it came from
    #[error(
        "Resolution request is stale: it was made for {expected} plans but the itinerary now has {actual}"
    )]
    StaleResolution { expected: usize, actual: usize },
    /// A completion was attempted while late plans still await a decision
    #[error("Trip '{trip_id}' has late plans awaiting a decision; resolve or dismiss them first")]
    ResolutionPending { trip_id: String },
    /// Resolve or dismiss was requested but nothing is pending
    #[error("Trip '{trip_id}' has no late plans awaiting a decision")]
    NoPendingResolution { trip_id: String },
    /// Unknown trip identifier
    #[error("Trip '{id}' not found")]
    TripNotFound { id: String },
    /// The trip exists in the catalog but has not been started
    #[error("Trip '{trip_id}' has not been started")]
    SessionNotFound { trip_id: String },
    /// No trip was given and none is active
    #[error("No active trip; start one with 'trip start <ID>'")]
    NoActiveTrip,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG data directory lookup errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TripError {
        TripError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TripError {
        TripError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TripError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TripError::database(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, TripError>;
