//! Plan-level operations for the Companion.

use super::{Companion, require_session, resolve_trip_id};
use crate::{
    error::Result,
    models::{PlanItem, Progress, ResolutionRequest},
    params::{ResolvePlans, TogglePlan, TripRef, UpcomingReminders},
    reflow::ToggleOutcome,
    reminders::{self, Reminder},
};

impl Companion {
    /// Toggles the completion of a plan and reflows the rest of the trip.
    ///
    /// When the reflow crosses the day-end cutoff, the returned outcome
    /// carries a resolution request that stays pending on the session until
    /// [`resolve_late_plans`](Self::resolve_late_plans) or
    /// [`dismiss_resolution`](Self::dismiss_resolution) is called.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed `at`, `OutOfRange` for a bad index,
    /// `ResolutionPending` while late plans await a decision.
    pub async fn toggle_plan(&self, params: &TogglePlan) -> Result<ToggleOutcome> {
        let now = params.time()?;
        let trip_id = params.trip_id.clone();
        let index = params.index;

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            db.update_session(&trip_id, |state| state.toggle(index, now))
        })
        .await
    }

    /// Applies the pending resolution, keeping the late plans in `keep` and
    /// removing the others. Without `keep`, every late plan stays.
    ///
    /// Returns the removed plans in itinerary order.
    pub async fn resolve_late_plans(&self, params: &ResolvePlans) -> Result<Vec<PlanItem>> {
        let trip_id = params.trip_id.clone();
        let keep = params.keep.clone();

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            db.resolve_session(&trip_id, keep.as_deref())
        })
        .await
    }

    /// Discards the pending resolution. Shifted times are kept.
    pub async fn dismiss_resolution(&self, params: &TripRef) -> Result<ResolutionRequest> {
        let trip_id = params.trip_id.clone();

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            db.update_session(&trip_id, |state| state.dismiss())
        })
        .await
    }

    pub async fn trip_progress(&self, params: &TripRef) -> Result<Progress> {
        let trip_id = params.trip_id.clone();

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            Ok(require_session(db, &trip_id)?.progress())
        })
        .await
    }

    /// Reminders for the rest of the current trip day.
    pub async fn upcoming_reminders(&self, params: &UpcomingReminders) -> Result<Vec<Reminder>> {
        let now = params.time()?;
        let trip_id = params.trip_id.clone();

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            let state = require_session(db, &trip_id)?;
            Ok(reminders::upcoming_reminders(&state, now))
        })
        .await
    }
}
