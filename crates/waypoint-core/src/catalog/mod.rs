//! Built-in trip catalog.
//!
//! The prepackaged itineraries ship inside the binary as a JSON asset and are
//! parsed once on first use. Lookups always hand out fresh copies, so a live
//! session can never alter the catalog.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::{
    error::{Result, TripError},
    models::{PlanItem, PlanKind, TimeOfDay, TripSummary},
};

const CATALOG_JSON: &str = include_str!("../../assets/trips.json");

/// Place-name suffixes dropped when building a route title, longest first.
const PLACE_SUFFIXES: &[&str] = &[
    "International Airport",
    "Shopping District",
    "Airport",
    "Station",
    "Hotel",
    "Downtown",
];

#[derive(Debug, Deserialize)]
struct CatalogTrip {
    id: String,
    name: String,
    days: u32,
    plans: Vec<CatalogPlan>,
}

#[derive(Debug, Deserialize)]
struct CatalogPlan {
    day: u32,
    time: String,
    kind: PlanKind,
    title: String,
    description: String,
    location: String,
}

impl TryFrom<&CatalogPlan> for PlanItem {
    type Error = TripError;

    fn try_from(plan: &CatalogPlan) -> Result<Self> {
        Ok(PlanItem::new(
            plan.day,
            plan.kind,
            plan.title.as_str(),
            plan.description.as_str(),
            plan.location.as_str(),
            plan.time.parse::<TimeOfDay>()?,
        ))
    }
}

impl CatalogTrip {
    fn items(&self) -> Result<Vec<PlanItem>> {
        self.plans.iter().map(PlanItem::try_from).collect()
    }

    fn summary(&self) -> Result<TripSummary> {
        let items = self.items()?;
        Ok(TripSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            days: self.days,
            plans: items.len(),
            route: route_title(&items),
            progress: None,
            active: false,
        })
    }
}

static CATALOG: LazyLock<std::result::Result<Vec<CatalogTrip>, serde_json::Error>> =
    LazyLock::new(|| serde_json::from_str(CATALOG_JSON));

fn catalog() -> Result<&'static [CatalogTrip]> {
    CATALOG
        .as_ref()
        .map(Vec::as_slice)
        .map_err(|e| TripError::Configuration {
            message: format!("Built-in trip catalog is malformed: {e}"),
        })
}

fn find(trip_id: &str) -> Result<&'static CatalogTrip> {
    catalog()?
        .iter()
        .find(|trip| trip.id == trip_id)
        .ok_or_else(|| TripError::TripNotFound {
            id: trip_id.to_string(),
        })
}

/// A fresh copy of the packaged itinerary for `trip_id`.
///
/// # Errors
///
/// `TripNotFound` for an unknown identifier.
pub fn get_itinerary(trip_id: &str) -> Result<Vec<PlanItem>> {
    find(trip_id)?.items()
}

/// Catalog entry for `trip_id`, without session progress.
pub fn trip_summary(trip_id: &str) -> Result<TripSummary> {
    find(trip_id)?.summary()
}

/// Every packaged trip in catalog order.
pub fn list_trips() -> Result<Vec<TripSummary>> {
    catalog()?.iter().map(CatalogTrip::summary).collect()
}

/// `origin -> destination` for an itinerary.
///
/// The origin is the first transport stop (or the first stop). The
/// destination is the last transport stop somewhere other than the origin,
/// so a round trip names its far end; failing that the last accommodation,
/// then the last stop. Generic place suffixes such as "International
/// Airport" or "Hotel" are dropped.
///
/// ```rust
/// use waypoint_core::{
///     catalog::route_title,
///     models::{PlanItem, PlanKind, TimeOfDay},
/// };
///
/// let at = |s: &str| s.parse::<TimeOfDay>().unwrap();
/// let items = vec![
///     PlanItem::new(1, PlanKind::Transport, "Fly", "", "Beijing Capital International Airport", at("09:00")),
///     PlanItem::new(1, PlanKind::Accommodation, "Check in", "", "Seoul Westin Hotel", at("16:00")),
/// ];
/// assert_eq!(route_title(&items), "Beijing Capital -> Seoul Westin");
/// ```
pub fn route_title(items: &[PlanItem]) -> String {
    if items.len() < 2 {
        return "Itinerary".to_string();
    }

    let origin = items
        .iter()
        .find(|item| item.kind == PlanKind::Transport)
        .unwrap_or(&items[0]);
    let origin = place_name(&origin.location);

    let destination = items
        .iter()
        .rev()
        .filter(|item| item.kind == PlanKind::Transport)
        .map(|item| place_name(&item.location))
        .find(|place| *place != origin)
        .or_else(|| {
            items
                .iter()
                .rev()
                .find(|item| item.kind == PlanKind::Accommodation)
                .map(|item| place_name(&item.location))
        })
        .unwrap_or_else(|| place_name(&items[items.len() - 1].location));

    format!("{origin} -> {destination}")
}

fn place_name(location: &str) -> String {
    let mut name = location.to_string();
    for suffix in PLACE_SUFFIXES {
        name = name.replace(suffix, "");
    }
    let trimmed = name.trim_matches(|c: char| c.is_whitespace() || c == '-');
    if trimmed.is_empty() {
        location.to_string()
    } else {
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
