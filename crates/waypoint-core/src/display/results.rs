//! Result wrapper types for displaying operation outcomes.
//!
//! These format what an operation did, followed by the resource it touched,
//! so the CLI and MCP tools report every action the same way.

use std::fmt;

use crate::{
    models::{Comment, PlanItem},
    reflow::ToggleOutcome,
};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Comment> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added comment {} to plan {}",
            self.resource.id, self.resource.plan_index
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the outcome of a completion toggle.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{
///     display::ToggleResult,
///     models::{ItineraryState, PlanItem, PlanKind, TimeOfDay},
/// };
///
/// let at = |s: &str| s.parse::<TimeOfDay>().unwrap();
/// let mut state = ItineraryState::new(
///     "demo",
///     vec![
///         PlanItem::new(1, PlanKind::Food, "Lunch", "", "", at("12:00")),
///         PlanItem::new(1, PlanKind::Activity, "Museum", "", "", at("14:00")),
///     ],
/// );
/// let outcome = state.toggle(0, at("12:45")).unwrap();
/// let output = ToggleResult::new(outcome).to_string();
/// assert!(output.contains("Later plans moved by 45 minutes"));
/// ```
pub struct ToggleResult {
    pub outcome: ToggleOutcome,
}

impl ToggleResult {
    pub fn new(outcome: ToggleOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = &self.outcome;
        let Some(reflow) = &outcome.reflow else {
            return writeln!(
                f,
                "Marked plan {} ({}) and every later plan as not completed.",
                outcome.index, outcome.title
            );
        };

        writeln!(f, "Completed plan {}: {}", outcome.index, outcome.title)?;
        writeln!(f)?;
        if reflow.delta_minutes == 0 {
            writeln!(f, "Right on time; no plans moved.")?;
        } else {
            writeln!(
                f,
                "Later plans moved by {} minutes ({} changed).",
                reflow.delta_minutes, reflow.shifted
            )?;
        }

        if let Some(request) = &reflow.resolution {
            writeln!(f)?;
            write!(f, "{request}")?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the plans removed by a resolution.
pub struct ResolutionResult {
    pub removed: Vec<PlanItem>,
}

impl ResolutionResult {
    pub fn new(removed: Vec<PlanItem>) -> Self {
        Self { removed }
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removed.is_empty() {
            return writeln!(f, "Kept every late plan.");
        }
        writeln!(f, "Removed {} late plan(s):", self.removed.len())?;
        writeln!(f)?;
        for item in &self.removed {
            writeln!(f, "- {item}")?;
        }
        Ok(())
    }
}
