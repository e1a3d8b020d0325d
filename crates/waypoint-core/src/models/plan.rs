//! Plan item model definition.

use serde::{Deserialize, Serialize};

use super::{PlanKind, TimeOfDay};

/// One scheduled stop in a trip itinerary.
///
/// Identity is the item's position in the itinerary; positions shift down
/// when an earlier item is removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanItem {
    /// Trip day this stop belongs to (1-based)
    pub day: u32,

    /// What kind of stop this is
    pub kind: PlanKind,

    /// Short title of the stop
    pub title: String,

    /// Longer description of what happens here
    pub description: String,

    /// Where the stop takes place
    pub location: String,

    /// Current planned time, possibly shifted by reflow
    pub scheduled_time: TimeOfDay,

    /// Planned time before the first shift; unset until then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_time: Option<TimeOfDay>,
}

impl PlanItem {
    /// Creates an unshifted plan item.
    pub fn new(
        day: u32,
        kind: PlanKind,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        scheduled_time: TimeOfDay,
    ) -> Self {
        Self {
            day,
            kind,
            title: title.into(),
            description: description.into(),
            location: location.into(),
            scheduled_time,
            original_time: None,
        }
    }

    /// The pre-shift time: `original_time` when stamped, else the current time.
    pub fn baseline(&self) -> TimeOfDay {
        self.original_time.unwrap_or(self.scheduled_time)
    }

    /// Stamps `original_time` from the current time if it is still unset and
    /// returns the baseline. An existing stamp is never replaced.
    pub(crate) fn capture_baseline(&mut self) -> TimeOfDay {
        *self.original_time.get_or_insert(self.scheduled_time)
    }

    /// Whether reflow has moved this item away from its original time.
    pub fn is_shifted(&self) -> bool {
        self.original_time
            .is_some_and(|original| original != self.scheduled_time)
    }
}
