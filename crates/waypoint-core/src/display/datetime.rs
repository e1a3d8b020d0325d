//! Timestamp formatting in the traveller's local time zone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Displays a `Timestamp` as `YYYY-MM-DD HH:MM TZ` in the system time zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M %Z"))
    }
}
