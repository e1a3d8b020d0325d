//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its contents with a consistent structure and a
//! friendly message for the empty case.

use std::{fmt, ops::Index};

use crate::{
    models::{ItineraryState, TripSummary},
    reminders::Reminder,
};

/// Newtype wrapper for displaying the trip catalog.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{catalog, display::Trips};
///
/// let trips = Trips(catalog::list_trips().unwrap());
/// assert!(!trips.is_empty());
/// assert!(trips.to_string().contains("**Route**"));
/// ```
pub struct Trips(pub Vec<TripSummary>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripSummary> {
        self.0.iter()
    }
}

impl Index<usize> for Trips {
    type Output = TripSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Trips {
    type Item = TripSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No trips found.")
        } else {
            for trip in &self.0 {
                write!(f, "{trip}")?;
            }
            Ok(())
        }
    }
}

/// Chronological timeline of an itinerary, grouped by trip day.
///
/// Completed plans are marked `✓`, the current plan (the first one not yet
/// completed) `➤`, everything after it `○`. A pending resolution request is
/// appended after the timeline.
pub struct Timeline<'a>(pub &'a ItineraryState);

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;
        if state.items.is_empty() {
            return writeln!(f, "No plans left in this itinerary.");
        }

        let current = state.current_index();
        let mut day = None;
        for (index, item) in state.items.iter().enumerate() {
            if day != Some(item.day) {
                if day.is_some() {
                    writeln!(f)?;
                }
                writeln!(f, "## Day {}", item.day)?;
                writeln!(f)?;
                day = Some(item.day);
            }

            let marker = if state.completed.contains(index) {
                "✓"
            } else if current == Some(index) {
                "➤"
            } else {
                "○"
            };
            writeln!(f, "- {marker} {index}. {item}")?;
        }

        if state.is_finished() {
            writeln!(f)?;
            writeln!(f, "All plans completed. Enjoy the rest of your trip!")?;
        }

        if let Some(request) = &state.pending {
            writeln!(f)?;
            write!(f, "{request}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying upcoming reminders.
pub struct Reminders(pub Vec<Reminder>);

impl Reminders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No upcoming plans for today.");
        }
        for reminder in &self.0 {
            write!(f, "{reminder}")?;
        }
        Ok(())
    }
}
