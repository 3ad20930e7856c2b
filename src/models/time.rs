//! Naive local date/time handling for the booking wire format.
//!
//! Dates travel as ISO `YYYY-MM-DD`, times-of-day as `HH:MM`. Everything is
//! naive local time; zone handling is out of scope for this service.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Wire format for times-of-day.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a wire date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a wire time-of-day (`HH:MM`).
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
}

/// Combine a calendar date with a time-of-day into a local instant.
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Serde adapter serializing `NaiveTime` as `HH:MM`.
pub mod serde_hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
