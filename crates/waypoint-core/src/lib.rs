//! Core library for the Waypoint travel itinerary companion.
//!
//! This crate provides the business logic for following a multi-day trip:
//! the packaged trip catalog, the reflow engine that keeps later plans in step
//! when the traveller runs late, late-plan resolution at the day-end cutoff,
//! plan comments, reminders, and SQLite persistence of trip sessions.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{CompanionBuilder, params::{StartTrip, TogglePlan}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let companion = CompanionBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! for trip in companion.list_trips().await? {
//!     println!("{}: {}", trip.id, trip.route);
//! }
//!
//! companion
//!     .start_trip(&StartTrip {
//!         trip_id: "beijing-korea-2days".to_string(),
//!     })
//!     .await?;
//!
//! // Finished the first plan 25 minutes late: everything after it moves.
//! let outcome = companion
//!     .toggle_plan(&TogglePlan {
//!         trip_id: None,
//!         index: 0,
//!         at: Some("09:25".to_string()),
//!     })
//!     .await?;
//! if let Some(request) = outcome.resolution() {
//!     println!("{request}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod companion;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod reflow;
pub mod reminders;

// Re-export commonly used types
pub use companion::{Companion, CompanionBuilder};
pub use db::Database;
pub use display::{
    CreateResult, LocalDateTime, OperationStatus, Reminders, ResolutionResult, Timeline,
    ToggleResult, Trips,
};
pub use error::{Result, TripError};
pub use models::{
    Comment, CommentThread, CompletionSet, ItineraryState, LatePlan, PlanItem, PlanKind, Progress,
    ResolutionRequest, TimeOfDay, TripSummary, TripView,
};
pub use reflow::{ReflowOutcome, ToggleOutcome};
pub use reminders::Reminder;
