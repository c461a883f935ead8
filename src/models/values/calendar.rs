//! Storage-native calendar tuples
//!
//! Date, time, and datetime columns have two representations in the engine:
//! the canonical chrono wrappers (`NaiveDate`, `NaiveTime`, `NaiveDateTime`)
//! that application code works with, and the structured component tuples the
//! storage boundary exchanges. `load` builds a wrapper from a tuple, `dump`
//! produces a tuple from a wrapper; these structs are the tuple side.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Storage-native calendar date: `{year, month, day}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateParts { year, month, day }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        DateParts {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Build the canonical wrapper. `None` when the components do not name a
    /// real calendar date.
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Storage-native time of day: `{hour, min, sec, micros}`.
///
/// `micros` is the fractional second in microseconds; sources without
/// sub-second precision store zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeParts {
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    pub micros: u32,
}

impl TimeParts {
    pub fn new(hour: u32, min: u32, sec: u32, micros: u32) -> Self {
        TimeParts {
            hour,
            min,
            sec,
            micros,
        }
    }

    /// Sub-microsecond precision is truncated.
    pub fn from_time(time: NaiveTime) -> Self {
        TimeParts {
            hour: time.hour(),
            min: time.minute(),
            sec: time.second(),
            micros: time.nanosecond() / 1_000,
        }
    }

    /// Build the canonical wrapper. `None` when a component is out of range.
    pub fn to_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_micro_opt(self.hour, self.min, self.sec, self.micros)
    }
}

/// Storage-native datetime: a date tuple plus a time tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateTimeParts {
    pub date: DateParts,
    pub time: TimeParts,
}

impl DateTimeParts {
    pub fn new(date: DateParts, time: TimeParts) -> Self {
        DateTimeParts { date, time }
    }

    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        DateTimeParts {
            date: DateParts::from_date(datetime.date()),
            time: TimeParts::from_time(datetime.time()),
        }
    }

    /// Build the canonical wrapper. `None` when either tuple is invalid.
    pub fn to_datetime(self) -> Option<NaiveDateTime> {
        let date = self.date.to_date()?;
        let time = self.time.to_time()?;
        Some(NaiveDateTime::new(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let parts = DateParts::from_date(date);
        assert_eq!(parts, DateParts::new(2025, 3, 14));
        assert_eq!(parts.to_date(), Some(date));
    }

    #[test]
    fn test_invalid_date_components() {
        assert_eq!(DateParts::new(2025, 13, 1).to_date(), None);
        assert_eq!(DateParts::new(2025, 2, 30).to_date(), None);
    }

    #[test]
    fn test_time_round_trip_with_micros() {
        let time = NaiveTime::from_hms_micro_opt(23, 59, 59, 123_456).unwrap();
        let parts = TimeParts::from_time(time);
        assert_eq!(parts, TimeParts::new(23, 59, 59, 123_456));
        assert_eq!(parts.to_time(), Some(time));
    }

    #[test]
    fn test_invalid_time_components() {
        assert_eq!(TimeParts::new(24, 0, 0, 0).to_time(), None);
        assert_eq!(TimeParts::new(0, 61, 0, 0).to_time(), None);
    }

    #[test]
    fn test_datetime_round_trip() {
        let datetime = NaiveDate::from_ymd_opt(1999, 12, 31)
            .unwrap()
            .and_hms_micro_opt(18, 30, 0, 42)
            .unwrap();
        let parts = DateTimeParts::from_datetime(datetime);
        assert_eq!(parts.to_datetime(), Some(datetime));
    }
}
