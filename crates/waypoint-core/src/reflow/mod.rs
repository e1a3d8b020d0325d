//! Itinerary reflow engine.
//!
//! The engine keeps later plans in step with reality. When a plan is marked
//! complete later than it was originally scheduled, every following plan is
//! moved by the same delay so the gaps between stops stay intact. A shift that
//! would land a plan at or after 23:00 stops the pass and produces a
//! [`ResolutionRequest`] instead: the traveller decides which late plans to
//! drop, nothing is deleted automatically.
//!
//! ```text
//! toggle_completion ──▶ reflow ──▶ Option<ResolutionRequest>
//!                                          │
//!                    apply_resolution ◀────┘ (keep set chosen by the user)
//! ```
//!
//! All operations are synchronous and all-or-nothing: they validate their
//! inputs before touching the itinerary, so an `Err` leaves it unchanged.
//!
//! # Example
//!
//! ```rust
//! use waypoint_core::{
//!     models::{ItineraryState, PlanItem, PlanKind, TimeOfDay},
//!     reflow,
//! };
//!
//! let at = |s: &str| s.parse::<TimeOfDay>().unwrap();
//! let items = vec![
//!     PlanItem::new(1, PlanKind::Food, "Dinner", "", "Ginza", at("22:00")),
//!     PlanItem::new(1, PlanKind::Activity, "Night walk", "", "Ginza", at("22:30")),
//!     PlanItem::new(1, PlanKind::Activity, "Bar", "", "Ginza", at("23:15")),
//! ];
//! let mut state = ItineraryState::new("demo", items);
//!
//! let outcome = state.toggle(0, at("23:00")).unwrap();
//! let request = outcome.resolution().unwrap();
//! assert_eq!(request.indices().collect::<Vec<_>>(), vec![1, 2]);
//!
//! // Keep the walk, drop the bar.
//! let removed = state.resolve(&[1]).unwrap();
//! assert_eq!(removed[0].title, "Bar");
//! assert_eq!(reflow::progress(&state.items, &state.completed).total, 2);
//! ```

use std::collections::BTreeSet;

use log::debug;

use crate::{
    error::{Result, TripError},
    models::{
        CompletionSet, ItineraryState, LatePlan, PlanItem, Progress, ResolutionRequest, TimeOfDay,
    },
};


/// Result of a single reflow pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowOutcome {
    /// Delay applied to later plans, in minutes (never negative)
    pub delta_minutes: u32,
    /// Number of later plans whose scheduled time changed
    pub shifted: usize,
    /// Late plans, when the pass hit the day-end cutoff
    pub resolution: Option<ResolutionRequest>,
}

/// Result of toggling a plan's completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The toggled plan index
    pub index: usize,
    /// Title of the toggled plan
    pub title: String,
    /// `true` if the plan is now completed, `false` if it was un-completed
    pub completed: bool,
    /// The reflow triggered by a completion; `None` for un-completion
    pub reflow: Option<ReflowOutcome>,
}

impl ToggleOutcome {
    /// The resolution request produced by the reflow, if any.
    pub fn resolution(&self) -> Option<&ResolutionRequest> {
        self.reflow.as_ref().and_then(|r| r.resolution.as_ref())
    }
}

fn check_index(items: &[PlanItem], index: usize) -> Result<()> {
    if index < items.len() {
        Ok(())
    } else {
        Err(TripError::OutOfRange {
            index,
            len: items.len(),
        })
    }
}

/// Flips the completion state of the plan at `index`.
///
/// Un-completing removes `index` and every later index from the set; no times
/// move. Completing adds `index` and every earlier index, then reflows the
/// rest of the itinerary with `now` as the completion time.
pub fn toggle_completion(
    items: &mut [PlanItem],
    completed: &mut CompletionSet,
    index: usize,
    now: TimeOfDay,
) -> Result<ToggleOutcome> {
    check_index(items, index)?;
    let title = items[index].title.clone();

    if completed.contains(index) {
        completed.uncomplete_from(index);
        debug!("Un-completed plan {index} and every later plan");
        return Ok(ToggleOutcome {
            index,
            title,
            completed: false,
            reflow: None,
        });
    }

    completed.complete_through(index);
    let outcome = reflow(items, index, now)?;
    Ok(ToggleOutcome {
        index,
        title,
        completed: true,
        reflow: Some(outcome),
    })
}

/// Shifts every plan after `completed_index` by the completion delay.
///
/// The delay is `now` minus the completed plan's original time, clamped at
/// zero. Each later plan moves to its own original time plus the delay. The
/// first plan that would land at or after 23:00 stops the pass unwritten; the
/// resolution request then lists every plan from that point on whose projected
/// time crosses the cutoff.
pub fn reflow(
    items: &mut [PlanItem],
    completed_index: usize,
    now: TimeOfDay,
) -> Result<ReflowOutcome> {
    check_index(items, completed_index)?;
    let itinerary_len = items.len();

    let plan = &mut items[completed_index];
    let original = plan.capture_baseline();
    plan.scheduled_time = now;
    let delta_minutes = now.total_minutes().saturating_sub(original.total_minutes());

    let mut shifted = 0;
    let mut break_at = None;
    for (index, item) in items.iter_mut().enumerate().skip(completed_index + 1) {
        let projected = item.capture_baseline().plus_minutes(delta_minutes);
        if projected.is_past_cutoff() {
            break_at = Some(index);
            break;
        }
        if item.scheduled_time != projected {
            item.scheduled_time = projected;
            shifted += 1;
        }
    }

    let resolution = break_at.map(|start| ResolutionRequest {
        completed_index,
        itinerary_len,
        delta_minutes,
        items: late_plans(items, start, delta_minutes),
    });

    debug!(
        "Reflowed after plan {completed_index}: delta {delta_minutes} min, {shifted} shifted, cutoff hit at {break_at:?}"
    );

    Ok(ReflowOutcome {
        delta_minutes,
        shifted,
        resolution,
    })
}

/// Plans from `start` onwards whose projected time crosses the cutoff.
fn late_plans(items: &[PlanItem], start: usize, delta_minutes: u32) -> Vec<LatePlan> {
    items
        .iter()
        .enumerate()
        .skip(start)
        .filter_map(|(index, item)| {
            let projected_time = item.baseline().plus_minutes(delta_minutes);
            projected_time.is_past_cutoff().then(|| LatePlan {
                index,
                title: item.title.clone(),
                kind: item.kind,
                time: item.scheduled_time,
                projected_time,
            })
        })
        .collect()
}

/// Deletes every late plan of `request` that is not listed in `keep`.
///
/// Deletions run from the highest index down so earlier removals never move
/// a target that is still to be processed. Completion indices are renumbered
/// after each removal. No reflow follows; surviving plans keep their times.
///
/// Returns the removed plans in ascending index order.
///
/// # Errors
///
/// `StaleResolution` when the itinerary no longer has the length the request
/// was made for, `InvalidInput` when `keep` names an index that is not part of
/// the request. Nothing is modified in either case.
pub fn apply_resolution(
    items: &mut Vec<PlanItem>,
    completed: &mut CompletionSet,
    request: &ResolutionRequest,
    keep: &[usize],
) -> Result<Vec<PlanItem>> {
    if request.itinerary_len != items.len() || request.indices().any(|i| i >= items.len()) {
        return Err(TripError::StaleResolution {
            expected: request.itinerary_len,
            actual: items.len(),
        });
    }
    if let Some(stray) = keep.iter().find(|&&i| !request.contains_index(i)) {
        return Err(TripError::invalid_input("keep")
            .with_reason(format!("plan {stray} is not one of the late plans")));
    }

    let keep: BTreeSet<usize> = keep.iter().copied().collect();
    let delete: BTreeSet<usize> = request.indices().filter(|i| !keep.contains(i)).collect();

    let mut removed = Vec::with_capacity(delete.len());
    for &index in delete.iter().rev() {
        removed.push(items.remove(index));
        completed.remove_and_renumber(index);
    }
    removed.reverse();

    debug!(
        "Applied resolution: kept {}, removed {}",
        keep.len(),
        removed.len()
    );
    Ok(removed)
}

/// Total and completed plan counts.
pub fn progress(items: &[PlanItem], completed: &CompletionSet) -> Progress {
    Progress {
        total: items.len(),
        completed: completed.len(),
    }
}

impl ItineraryState {
    /// Toggles a plan and remembers any resulting resolution request.
    ///
    /// Refuses with `ResolutionPending` while an earlier request is still
    /// open, since its indices would go stale.
    pub fn toggle(&mut self, index: usize, now: TimeOfDay) -> Result<ToggleOutcome> {
        if self.pending.is_some() {
            return Err(TripError::ResolutionPending {
                trip_id: self.trip_id.clone(),
            });
        }
        let outcome = toggle_completion(&mut self.items, &mut self.completed, index, now)?;
        self.pending = outcome.resolution().cloned();
        Ok(outcome)
    }

    /// Applies the pending request, keeping the late plans listed in `keep`.
    pub fn resolve(&mut self, keep: &[usize]) -> Result<Vec<PlanItem>> {
        let request = self
            .pending
            .as_ref()
            .ok_or_else(|| TripError::NoPendingResolution {
                trip_id: self.trip_id.clone(),
            })?;
        let removed = apply_resolution(&mut self.items, &mut self.completed, request, keep)?;
        self.pending = None;
        Ok(removed)
    }

    /// Discards the pending request; shifted times stay as they are.
    pub fn dismiss(&mut self) -> Result<ResolutionRequest> {
        self.pending
            .take()
            .ok_or_else(|| TripError::NoPendingResolution {
                trip_id: self.trip_id.clone(),
            })
    }

    pub fn progress(&self) -> Progress {
        progress(&self.items, &self.completed)
    }
}
