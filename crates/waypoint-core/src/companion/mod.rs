//! High-level companion API for travelling through a trip.
//!
//! [`Companion`] is the entry point used by the CLI and the MCP server. Every
//! method opens the database on the blocking thread pool, runs one engine
//! operation against the stored session inside a single transaction, and
//! returns plain model types for the display layer to format.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Companion    │    │  Reflow Engine  │    │    Database     │
//! │ (trip_ops,      │───▶│ (reflow,        │◀──▶│   (via db/)     │
//! │  plan_ops, ...) │    │  reminders)     │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Async facade          Pure logic          Session storage
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Companion`] instances
//! - [`trip_ops`]: Listing, starting, showing and resetting trips
//! - [`plan_ops`]: Completion toggles, late-plan resolution, progress,
//!   reminders
//! - [`comment_ops`]: Plan comments and ratings
//!
//! Operations that take a trip reference fall back to the active trip, which
//! is whichever trip was started most recently.
//!
//! # Example
//!
//! ```rust
//! use waypoint_core::{
//!     CompanionBuilder,
//!     params::{StartTrip, TogglePlan},
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let companion = CompanionBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let view = companion
//!     .start_trip(&StartTrip {
//!         trip_id: "shanghai-japan-3days".to_string(),
//!     })
//!     .await?;
//! println!("{view}");
//!
//! let outcome = companion
//!     .toggle_plan(&TogglePlan {
//!         trip_id: None,
//!         index: 0,
//!         at: Some("08:20".to_string()),
//!     })
//!     .await?;
//! assert!(outcome.completed);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TripError},
    models::ItineraryState,
};

pub mod builder;
pub mod comment_ops;
pub mod plan_ops;
pub mod trip_ops;


pub use builder::CompanionBuilder;

/// Async facade over the trip catalog, the reflow engine and session storage.
#[derive(Debug, Clone)]
pub struct Companion {
    pub(crate) db_path: PathBuf,
}

impl Companion {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this companion.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(TripError::join)?
    }
}

/// The given trip, or the active one when `trip_id` is `None`.
pub(crate) fn resolve_trip_id(db: &Database, trip_id: Option<&str>) -> Result<String> {
    match trip_id {
        Some(id) => Ok(id.to_string()),
        None => db.active_trip()?.ok_or(TripError::NoActiveTrip),
    }
}

/// The stored session of `trip_id`; `SessionNotFound` if it was never started.
pub(crate) fn require_session(db: &Database, trip_id: &str) -> Result<ItineraryState> {
    db.load_session(trip_id)?
        .ok_or_else(|| TripError::SessionNotFound {
            trip_id: trip_id.to_string(),
        })
}
