//! Comment operations for the Companion.

use super::{Companion, require_session, resolve_trip_id};
use crate::{
    error::{Result, TripError},
    models::{Comment, CommentThread},
    params::{AddComment, ListComments},
};

/// Highest star rating a comment can give.
pub const MAX_RATING: u8 = 5;

impl Companion {
    /// Rates and comments on a plan of a started trip.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a rating outside 1-5 or empty content,
    /// `OutOfRange` for an index past the end of the itinerary.
    pub async fn add_comment(&self, params: &AddComment) -> Result<Comment> {
        if !(1..=MAX_RATING).contains(&params.rating) {
            return Err(TripError::invalid_input("rating").with_reason(format!(
                "{} is not between 1 and {MAX_RATING}",
                params.rating
            )));
        }
        let content = params.content.trim().to_string();
        if content.is_empty() {
            return Err(TripError::invalid_input("content").with_reason("comment is empty"));
        }

        let trip_id = params.trip_id.clone();
        let index = params.index;
        let rating = params.rating;

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            db.add_comment(&trip_id, index, rating, &content)
        })
        .await
    }

    /// All comments on a plan, newest first, with the plan's title.
    pub async fn list_comments(&self, params: &ListComments) -> Result<CommentThread> {
        let trip_id = params.trip_id.clone();
        let index = params.index;

        self.with_database(move |db| {
            let trip_id = resolve_trip_id(db, trip_id.as_deref())?;
            let state = require_session(db, &trip_id)?;
            let plan = state.items.get(index).ok_or(TripError::OutOfRange {
                index,
                len: state.items.len(),
            })?;

            Ok(CommentThread {
                plan_title: plan.title.clone(),
                plan_index: index,
                comments: db.list_comments(&trip_id, index)?,
            })
        })
        .await
    }
}
