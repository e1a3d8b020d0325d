//! Upcoming-plan reminders.
//!
//! Projects the remaining plans of the current trip day into reminders the
//! presentation layer can show or schedule. Nothing is timed here; callers
//! decide when to surface a reminder.

use serde::{Deserialize, Serialize};

use crate::models::{ItineraryState, PlanKind, TimeOfDay};

/// A reminder for one plan that has not started yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reminder {
    /// Position of the plan in the itinerary
    pub index: usize,
    /// Title of the plan
    pub title: String,
    /// Kind of the plan
    pub kind: PlanKind,
    /// Scheduled time of the plan
    pub time: TimeOfDay,
    /// Minutes from `now` until the plan starts
    pub minutes_until: u32,
    /// Message to show the traveller
    pub message: String,
}

/// Reminders for the uncompleted plans of the current day scheduled after
/// `now`, in itinerary order.
///
/// The current day is the day of the first uncompleted plan. A finished trip
/// has no reminders.
pub fn upcoming_reminders(state: &ItineraryState, now: TimeOfDay) -> Vec<Reminder> {
    let Some(current) = state.current_index() else {
        return Vec::new();
    };
    let day = state.items[current].day;

    state
        .items
        .iter()
        .enumerate()
        .skip(current)
        .take_while(|(_, item)| item.day == day)
        .filter(|(_, item)| item.scheduled_time > now)
        .map(|(index, item)| Reminder {
            index,
            title: item.title.clone(),
            kind: item.kind,
            time: item.scheduled_time,
            minutes_until: item.scheduled_time.total_minutes() - now.total_minutes(),
            message: reminder_message(item.kind, &item.title, item.scheduled_time),
        })
        .collect()
}

fn reminder_message(kind: PlanKind, title: &str, time: TimeOfDay) -> String {
    match kind {
        PlanKind::Transport => format!("{title} is about to start, get ready to leave."),
        _ => format!("It is {time}: time for {title}."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanItem;

    fn at(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn state() -> ItineraryState {
        ItineraryState::new(
            "test",
            vec![
                PlanItem::new(1, PlanKind::Transport, "Flight out", "", "PVG", at("08:00")),
                PlanItem::new(1, PlanKind::Transport, "Airport express", "", "NRT", at("14:00")),
                PlanItem::new(1, PlanKind::Food, "Sushi dinner", "", "Ginza", at("19:00")),
                PlanItem::new(2, PlanKind::Food, "Breakfast", "", "Hotel", at("08:00")),
            ],
        )
    }

    #[test]
    fn test_reminders_cover_rest_of_current_day() {
        let mut state = state();
        state.toggle(0, at("08:00")).unwrap();

        let reminders = upcoming_reminders(&state, at("12:00"));
        assert_eq!(reminders.len(), 2);
        assert_eq!(reminders[0].index, 1);
        assert_eq!(reminders[0].minutes_until, 120);
        assert!(reminders[0].message.contains("get ready to leave"));
        assert_eq!(reminders[1].message, "It is 19:00: time for Sushi dinner.");
    }

    #[test]
    fn test_past_plans_are_skipped() {
        let state = state();
        let reminders = upcoming_reminders(&state, at("15:00"));
        assert_eq!(
            reminders.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_finished_trip_has_no_reminders() {
        let mut state = state();
        state.toggle(3, at("08:00")).unwrap();
        assert!(upcoming_reminders(&state, at("00:00")).is_empty());
    }
}
