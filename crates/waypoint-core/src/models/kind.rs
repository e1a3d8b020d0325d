//! Plan kind enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Flights, trains, transfers
    Transport,
    /// Sightseeing and other things to do
    Activity,
    /// Meals
    Food,
    /// Hotel check-in and stays
    Accommodation,
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transport" => Ok(PlanKind::Transport),
            "activity" => Ok(PlanKind::Activity),
            "food" => Ok(PlanKind::Food),
            "accommodation" => Ok(PlanKind::Accommodation),
            _ => Err(format!("Invalid plan kind: {s}")),
        }
    }
}

impl PlanKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Transport => "transport",
            PlanKind::Activity => "activity",
            PlanKind::Food => "food",
            PlanKind::Accommodation => "accommodation",
        }
    }

    /// Human readable label with an icon for timeline display.
    ///
    /// ```rust
    /// use waypoint_core::models::PlanKind;
    ///
    /// assert_eq!(PlanKind::Food.with_icon(), "🍽 Food");
    /// assert_eq!(PlanKind::Transport.with_icon(), "✈ Transport");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlanKind::Transport => "✈ Transport",
            PlanKind::Activity => "★ Activity",
            PlanKind::Food => "🍽 Food",
            PlanKind::Accommodation => "⌂ Stay",
        }
    }
}
