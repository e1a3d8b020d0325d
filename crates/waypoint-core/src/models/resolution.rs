//! Late-plan resolution requests.

use serde::{Deserialize, Serialize};

use super::{PlanKind, TimeOfDay};

/// A plan that a reflow would push past the day-end cutoff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatePlan {
    /// Position of the plan in the itinerary when the request was made
    pub index: usize,

    /// Title of the plan
    pub title: String,

    /// Kind of the plan
    pub kind: PlanKind,

    /// Scheduled time as it currently reads (not rewritten by the reflow)
    pub time: TimeOfDay,

    /// Where the reflow would have put the plan; the hour may exceed 23
    pub projected_time: TimeOfDay,
}

/// A pending choice of which late plans to drop.
///
/// Created by a reflow that crossed the cutoff, consumed once by
/// [`crate::reflow::apply_resolution`] or discarded by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// The plan whose late completion triggered the reflow
    pub completed_index: usize,

    /// Itinerary length the request was derived from
    pub itinerary_len: usize,

    /// Delay applied by the reflow, in minutes
    pub delta_minutes: u32,

    /// Late plans in ascending index order
    pub items: Vec<LatePlan>,
}

impl ResolutionRequest {
    /// Indices of the late plans, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.indices().any(|i| i == index)
    }
}
