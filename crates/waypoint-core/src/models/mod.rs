//! Data models for trips, plan items, and itinerary state.
//!
//! This module contains the core domain models of the itinerary companion.
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures and presentation apart.
//!
//! # Model Overview
//!
//! - [`TimeOfDay`]: wall-clock time (`HH:MM`). Reflow arithmetic may push the
//!   hour past 23 without wrapping; such values are compared against the
//!   day-end cutoff and never written back into a plan.
//! - [`PlanItem`]: one scheduled stop. Its `original_time` is stamped the first
//!   time the item is shifted and never overwritten afterwards.
//! - [`CompletionSet`]: completed plan indices, always a prefix `{0, ..., k}`.
//! - [`ResolutionRequest`]: late plans produced by a reflow that crossed the
//!   day-end cutoff, waiting for the traveller to decide which to drop.
//! - [`ItineraryState`]: the live itinerary of one trip, threaded through
//!   every engine operation.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{CompletionSet, PlanItem, PlanKind, TimeOfDay};
//!
//! let item = PlanItem::new(
//!     1,
//!     PlanKind::Activity,
//!     "Senso-ji Temple",
//!     "Visit the oldest temple in Tokyo",
//!     "Asakusa",
//!     "17:00".parse::<TimeOfDay>().unwrap(),
//! );
//! assert_eq!(item.baseline().to_string(), "17:00");
//!
//! let completed = CompletionSet::prefix(2);
//! assert!(completed.contains(1));
//! assert!(!completed.contains(2));
//! ```

pub mod comment;
pub mod completion;
pub mod kind;
pub mod plan;
pub mod resolution;
pub mod state;
pub mod time;
pub mod trip;


pub use comment::{Comment, CommentThread};
pub use completion::CompletionSet;
pub use kind::PlanKind;
pub use plan::PlanItem;
pub use resolution::{LatePlan, ResolutionRequest};
pub use state::{ItineraryState, Progress};
pub use time::TimeOfDay;
pub use trip::{TripSummary, TripView};
