//! Wall-clock time of day used by plan schedules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// Hour at which a shifted plan counts as unreasonably late.
pub const DAY_END_CUTOFF_HOUR: u32 = 23;

/// A time of day with minute precision.
///
/// Values built through [`TimeOfDay::new`] or parsing always lie within one
/// day. [`TimeOfDay::plus_minutes`] does not wrap, so the hour of a projected
/// time may be 24 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hours: u32,
    minutes: u32,
}

impl TimeOfDay {
    /// Creates a time within a single day.
    pub fn new(hours: u32, minutes: u32) -> Result<Self> {
        if hours > 23 {
            return Err(TripError::invalid_input("time")
                .with_reason(format!("hour {hours} is outside 0-23")));
        }
        if minutes > 59 {
            return Err(TripError::invalid_input("time")
                .with_reason(format!("minute {minutes} is outside 0-59")));
        }
        Ok(Self { hours, minutes })
    }

    /// Builds a time from minutes since midnight without wrapping at 24h.
    pub fn from_total_minutes(total: u32) -> Self {
        Self {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::from(jiff::Zoned::now().time())
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Minutes elapsed since midnight.
    pub fn total_minutes(&self) -> u32 {
        self.hours * 60 + self.minutes
    }

    /// Adds minutes, letting the hour run past 23.
    pub fn plus_minutes(self, delta: u32) -> Self {
        Self::from_total_minutes(self.total_minutes() + delta)
    }

    /// Whether this time falls at or after the day-end cutoff.
    pub fn is_past_cutoff(&self) -> bool {
        self.hours >= DAY_END_CUTOFF_HOUR
    }

    /// Whether the hour has run past midnight of the current day.
    pub fn is_next_day(&self) -> bool {
        self.hours >= 24
    }
}

impl From<jiff::civil::Time> for TimeOfDay {
    fn from(time: jiff::civil::Time) -> Self {
        // jiff guarantees hour in 0..=23 and minute in 0..=59
        Self {
            hours: time.hour().unsigned_abs().into(),
            minutes: time.minute().unsigned_abs().into(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TripError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || TripError::invalid_input("time").with_reason(format!("'{s}' is not in HH:MM format"));

        let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.len() != 2 || hours.is_empty() || hours.len() > 2 {
            return Err(invalid());
        }
        let hours = hours.parse::<u32>().map_err(|_| invalid())?;
        let minutes = minutes.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hours, minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let time: TimeOfDay = "08:05".parse().unwrap();
        assert_eq!(time.hours(), 8);
        assert_eq!(time.minutes(), 5);
        assert_eq!(time.to_string(), "08:05");

        let short: TimeOfDay = "9:30".parse().unwrap();
        assert_eq!(short.to_string(), "09:30");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "0800", "24:00", "12:60", "ab:cd", "1:2", "123:00"] {
            assert!(input.parse::<TimeOfDay>().is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn test_plus_minutes_does_not_wrap() {
        let late = TimeOfDay::new(23, 15).unwrap().plus_minutes(60);
        assert_eq!(late.hours(), 24);
        assert_eq!(late.minutes(), 15);
        assert!(late.is_past_cutoff());
        assert!(late.is_next_day());
    }

    #[test]
    fn test_cutoff_boundary() {
        assert!(!TimeOfDay::new(22, 59).unwrap().is_past_cutoff());
        assert!(TimeOfDay::new(23, 0).unwrap().is_past_cutoff());
    }

    #[test]
    fn test_from_civil_time() {
        let time = TimeOfDay::from(jiff::civil::time(14, 7, 30, 0));
        assert_eq!(time, TimeOfDay::new(14, 7).unwrap());
    }

    #[test]
    fn test_ordering() {
        let early = TimeOfDay::new(9, 59).unwrap();
        let later = TimeOfDay::new(10, 0).unwrap();
        assert!(early < later);
    }
}
