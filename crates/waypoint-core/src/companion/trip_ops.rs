//! Trip-level operations for the Companion.

use log::info;

use super::{Companion, require_session, resolve_trip_id};
use crate::{
    catalog,
    error::{Result, TripError},
    models::{ItineraryState, TripSummary, TripView},
    params::{StartTrip, TripRef},
};

impl Companion {
    /// Lists the packaged trips with the progress of any started session.
    pub async fn list_trips(&self) -> Result<Vec<TripSummary>> {
        let mut trips = catalog::list_trips()?;

        let (sessions, active) = self
            .with_database(|db| Ok((db.list_session_progress()?, db.active_trip()?)))
            .await?;

        for trip in &mut trips {
            trip.progress = sessions
                .iter()
                .find(|(trip_id, _)| *trip_id == trip.id)
                .map(|(_, progress)| *progress);
            trip.active = active.as_deref() == Some(trip.id.as_str());
        }
        Ok(trips)
    }

    /// Starts a trip from its packaged itinerary, or resumes it if it was
    /// started before, and makes it the active trip.
    ///
    /// # Errors
    ///
    /// `TripNotFound` for an identifier that is not in the catalog.
    pub async fn start_trip(&self, params: &StartTrip) -> Result<TripView> {
        let items = catalog::get_itinerary(&params.trip_id)?;
        let mut summary = catalog::trip_summary(&params.trip_id)?;
        let fresh = ItineraryState::new(params.trip_id.clone(), items);

        let state = self.with_database(move |db| db.start_session(fresh)).await?;

        summary.active = true;
        Ok(TripView::new(summary, state))
    }

    /// The active trip, if one has been started and not reset.
    pub async fn active_trip(&self) -> Result<Option<TripView>> {
        let state = self
            .with_database(|db| match db.active_trip()? {
                Some(trip_id) => db.load_session(&trip_id),
                None => Ok(None),
            })
            .await?;

        state
            .map(|state| {
                let mut summary = catalog::trip_summary(&state.trip_id)?;
                summary.active = true;
                Ok(TripView::new(summary, state))
            })
            .transpose()
    }

    /// The live itinerary of a started trip.
    pub async fn show_trip(&self, params: &TripRef) -> Result<TripView> {
        let trip_id = params.trip_id.clone();
        let (state, active) = self
            .with_database(move |db| {
                let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
                Ok((require_session(db, &trip_id)?, db.active_trip()?))
            })
            .await?;

        let mut summary = catalog::trip_summary(&state.trip_id)?;
        summary.active = active.as_deref() == Some(state.trip_id.as_str());
        Ok(TripView::new(summary, state))
    }

    /// Forgets a trip's session: completion, shifted times, removed plans and
    /// comments. The next start begins again from the packaged itinerary. If
    /// the trip was active, no trip is active afterwards.
    ///
    /// Returns the identifier of the reset trip.
    pub async fn reset_trip(&self, params: &TripRef) -> Result<String> {
        let trip_id = params.trip_id.clone();
        let trip_id = self
            .with_database(move |db| {
                let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
                if db.delete_session(&trip_id)? {
                    Ok(trip_id)
                } else {
                    Err(TripError::SessionNotFound { trip_id })
                }
            })
            .await?;

        info!("Reset trip '{trip_id}'");
        Ok(trip_id)
    }
}
