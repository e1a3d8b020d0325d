//! Parameter structures for companion operations.
//!
//! These are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation for the MCP
//! tools is enabled through the `schema` feature.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap argument structs into these types with `From`;
//! the MCP server deserializes them directly from tool arguments.
//!
//! Trip references are optional throughout: `None` means the active trip.
//! Times are `HH:MM` strings and default to the local wall clock.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::TimeOfDay};

/// Parses an optional `HH:MM` override, falling back to the current time.
fn time_or_now(at: Option<&str>) -> Result<TimeOfDay> {
    match at {
        Some(at) => at.parse(),
        None => Ok(TimeOfDay::now()),
    }
}

/// Parameters for starting (or resuming) a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartTrip {
    /// Catalog identifier of the trip, e.g. `shanghai-japan-3days`
    pub trip_id: String,
}

/// Parameters for operations on a whole trip.
///
/// Used by show_trip, trip_progress, reset_trip and dismiss_resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TripRef {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
}

/// Parameters for toggling the completion of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TogglePlan {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Zero-based position of the plan in the itinerary
    pub index: usize,
    /// Completion time as HH:MM; defaults to the current local time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

impl TogglePlan {
    /// The completion time, parsed from `at` or read from the clock.
    pub fn time(&self) -> Result<TimeOfDay> {
        time_or_now(self.at.as_deref())
    }
}

/// Parameters for resolving late plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolvePlans {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Indices of late plans to keep; every other late plan is removed.
    /// Omit to keep every late plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep: Option<Vec<usize>>,
}

/// Parameters for commenting on a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddComment {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Zero-based position of the plan in the itinerary
    pub index: usize,
    /// Star rating from 1 to 5
    pub rating: u8,
    /// Comment text
    pub content: String,
}

/// Parameters for listing the comments on a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListComments {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Zero-based position of the plan in the itinerary
    pub index: usize,
}

/// Parameters for listing upcoming plan reminders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpcomingReminders {
    /// Trip to operate on; defaults to the active trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    /// Reference time as HH:MM; defaults to the current local time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
}

impl UpcomingReminders {
    /// The reference time, parsed from `at` or read from the clock.
    pub fn time(&self) -> Result<TimeOfDay> {
        time_or_now(self.at.as_deref())
    }
}
