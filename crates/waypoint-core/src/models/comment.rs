//! Traveller comments and ratings on plan items.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A rating and note left on one plan of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique identifier for the comment
    pub id: u64,

    /// Trip the comment belongs to
    pub trip_id: String,

    /// Position of the commented plan in the trip's itinerary
    pub plan_index: usize,

    /// Star rating, 1 to 5
    pub rating: u8,

    /// Free-form text
    pub content: String,

    /// Timestamp when the comment was written (UTC)
    pub created_at: Timestamp,
}

/// All comments on a single plan, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentThread {
    /// Title of the commented plan
    pub plan_title: String,

    /// Position of the plan in the itinerary
    pub plan_index: usize,

    pub comments: Vec<Comment>,
}

impl CommentThread {
    /// Mean rating, or `None` without comments.
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let sum: u32 = self.comments.iter().map(|c| u32::from(c.rating)).sum();
        Some(f64::from(sum) / self.comments.len() as f64)
    }
}
