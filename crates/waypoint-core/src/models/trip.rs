//! Trip summary type.

use serde::{Deserialize, Serialize};

use super::{ItineraryState, Progress};

/// Catalog entry for a prepackaged trip, with session progress when started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    /// Catalog identifier, e.g. `shanghai-japan-3days`
    pub id: String,
    /// Display name of the trip
    pub name: String,
    /// Number of days the trip spans
    pub days: u32,
    /// Number of plans in the packaged itinerary
    pub plans: usize,
    /// `origin -> destination` derived from the transport stops
    pub route: String,
    /// Progress of the saved session, if the trip has been started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    /// Whether this is the active trip
    #[serde(default)]
    pub active: bool,
}

/// A trip's catalog entry together with its live itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripView {
    pub summary: TripSummary,
    pub state: ItineraryState,
}

impl TripView {
    /// Builds the view, refreshing the summary's progress from the state.
    pub fn new(mut summary: TripSummary, state: ItineraryState) -> Self {
        summary.progress = Some(state.progress());
        Self { summary, state }
    }
}
