//! Live itinerary state and progress.

use serde::{Deserialize, Serialize};

use super::{CompletionSet, PlanItem, ResolutionRequest};

/// The live itinerary of one trip.
///
/// Owned by the caller and passed into every engine operation; the engine
/// keeps nothing between calls. Mutating methods live in [`crate::reflow`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItineraryState {
    /// Catalog identifier of the trip
    pub trip_id: String,

    /// Ordered plan items
    pub items: Vec<PlanItem>,

    /// Completed plan indices (prefix-closed)
    pub completed: CompletionSet,

    /// Late plans awaiting a decision, if the last reflow crossed the cutoff
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<ResolutionRequest>,
}

impl ItineraryState {
    /// Fresh state for a trip: nothing completed, nothing pending.
    pub fn new(trip_id: impl Into<String>, items: Vec<PlanItem>) -> Self {
        Self {
            trip_id: trip_id.into(),
            items,
            completed: CompletionSet::new(),
            pending: None,
        }
    }

    /// Index of the first plan that is not completed yet.
    pub fn current_index(&self) -> Option<usize> {
        let next = self.completed.len();
        (next < self.items.len()).then_some(next)
    }

    pub fn is_finished(&self) -> bool {
        !self.items.is_empty() && self.completed.len() == self.items.len()
    }
}

/// Completion counts of an itinerary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Number of plans in the itinerary
    pub total: usize,
    /// Number of completed plans
    pub completed: usize,
}

impl Progress {
    /// Completed share in percent; `0.0` for an empty itinerary.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}
