//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! the same data can be rendered differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers &     │    │   Markdown      │
//! │ (PlanItem, ...) │───▶│  Result Types   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Trips, Timeline, Reminders
//! - [`results`]: CreateResult, ToggleResult, ResolutionResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use waypoint_core::{
//!     display::{OperationStatus, Timeline},
//!     models::{ItineraryState, PlanItem, PlanKind, TimeOfDay},
//! };
//!
//! let state = ItineraryState::new(
//!     "demo",
//!     vec![PlanItem::new(
//!         1,
//!         PlanKind::Activity,
//!         "Shibuya Crossing",
//!         "",
//!         "Shibuya",
//!         "18:00".parse::<TimeOfDay>().unwrap(),
//!     )],
//! );
//! let timeline = Timeline(&state).to_string();
//! assert!(timeline.contains("➤ 0. 18:00"));
//!
//! println!("{}", OperationStatus::success("Trip started"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Reminders, Timeline, Trips};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, ResolutionResult, ToggleResult};
pub use status::OperationStatus;
