//! Date/time parsing and formatting for both export formats.
//!
//! All values are naive wall-clock times. No timezone conversion happens here.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};

use crate::error::{KitacalError, KitacalResult};

/// A parsed event bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl EventTime {
    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DDTHH:MM`.
    pub fn parse(s: &str) -> KitacalResult<Self> {
        let s = s.trim();

        if !s.contains('T') {
            return NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(EventTime::Date)
                .map_err(|_| KitacalError::InvalidDate(s.to_string()));
        }

        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
            .map(EventTime::DateTime)
            .map_err(|_| KitacalError::InvalidDate(s.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            EventTime::Date(d) => *d,
            EventTime::DateTime(dt) => dt.date(),
        }
    }

    /// The value as a date-time; a bare date is midnight.
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        match self {
            EventTime::Date(d) => d.and_time(chrono::NaiveTime::MIN),
            EventTime::DateTime(dt) => *dt,
        }
    }
}

/// `YYYYMMDD`
pub fn format_ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// `YYYYMMDDTHHMMSS`, without any zone suffix
pub fn format_ics_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// `YYYYMMDDTHHMMSSZ` from a real UTC instant.
pub fn format_dtstamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%dT%H%M%SZ").to_string()
}

/// All-day `DTEND` is exclusive: the day after the last day of the event.
pub fn exclusive_end(date: NaiveDate) -> KitacalResult<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| KitacalError::InvalidDate(date.to_string()))
}

/// Date and time cells for the spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetDateTime {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, empty for date-only input
    pub time: String,
}

/// Split an input bound on the date/time separator.
///
/// This is a plain string split: the input is not validated.
pub fn split_date_time(s: &str) -> SheetDateTime {
    match s.split_once('T') {
        Some((date, time)) => SheetDateTime {
            date: date.to_string(),
            time: time.chars().take(5).collect(),
        },
        None => SheetDateTime {
            date: s.to_string(),
            time: String::new(),
        },
    }
}
