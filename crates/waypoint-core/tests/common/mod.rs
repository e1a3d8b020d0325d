#![allow(dead_code)]

use tempfile::TempDir;
use waypoint_core::{
    CompanionBuilder, ItineraryState, PlanItem, PlanKind, TimeOfDay, catalog,
};

/// Helper function to create a test companion
pub async fn create_test_companion() -> (TempDir, waypoint_core::Companion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let companion = CompanionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create companion");
    (temp_dir, companion)
}

pub fn at(s: &str) -> TimeOfDay {
    s.parse().expect("valid time")
}

/// A fresh session for a packaged trip.
pub fn catalog_state(trip_id: &str) -> ItineraryState {
    let items = catalog::get_itinerary(trip_id).expect("Failed to load itinerary");
    ItineraryState::new(trip_id, items)
}

/// A one-day itinerary that runs into the late evening.
pub fn evening_state(trip_id: &str) -> ItineraryState {
    ItineraryState::new(
        trip_id,
        vec![
            PlanItem::new(1, PlanKind::Food, "Dinner", "", "Ginza", at("20:00")),
            PlanItem::new(1, PlanKind::Activity, "Night walk", "", "Ginza", at("21:30")),
            PlanItem::new(1, PlanKind::Activity, "Karaoke", "", "Shibuya", at("22:15")),
            PlanItem::new(1, PlanKind::Accommodation, "Back to hotel", "", "Hotel", at("22:45")),
        ],
    )
}
