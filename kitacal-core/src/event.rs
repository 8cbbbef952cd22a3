//! Calendar input model.
//!
//! The input file is a JSON object with a `calendar_info` header and an
//! ordered `events` list. Events have no identity of their own; their
//! position in the list is used to derive a stable UID.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KitacalError, KitacalResult};

/// Calendar-level metadata, read once per run.
///
/// Missing fields fall back to the kindergarten's own calendar header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarInfo {
    pub name: String,
    pub description: String,
    /// IANA timezone identifier, e.g. "Europe/Berlin"
    pub timezone: String,
    /// ISO-8601 duration, e.g. "P1D"
    pub refresh_interval: String,
}

impl Default for CalendarInfo {
    fn default() -> Self {
        CalendarInfo {
            name: "Idsteiner Waldorfkindergarten 2025".to_string(),
            description: "Kompletter Kalender des Idsteiner Waldorfkindergarten".to_string(),
            timezone: "Europe/Berlin".to_string(),
            refresh_interval: "P1D".to_string(),
        }
    }
}

/// Kind of event. Drives color, description annotations and transparency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Closure,
    Meeting,
    Event,
    HolidayCare,
    /// Any type not known to kitacal, kept verbatim
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Closure => "closure",
            EventType::Meeting => "meeting",
            EventType::Event => "event",
            EventType::HolidayCare => "holiday_care",
            EventType::Other(s) => s,
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "closure" => EventType::Closure,
            "meeting" => EventType::Meeting,
            "event" => EventType::Event,
            "holiday_care" => EventType::HolidayCare,
            _ => EventType::Other(s),
        }
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        EventType::from(s.to_string())
    }
}

impl From<EventType> for String {
    fn from(t: EventType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single calendar entry as it appears in the input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
    pub start: String,
    /// Same granularity as `start`
    pub end: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Free-form, scoped by type (e.g. "holiday" under closure)
    #[serde(default)]
    pub category: String,
}

impl Event {
    /// An event is all-day when neither bound carries a time component.
    pub fn is_all_day(&self) -> bool {
        !self.start.contains('T') && !self.end.contains('T')
    }

    /// Synthetic UID built from the event type and its position in the input.
    pub fn uid(&self, index: usize, domain: &str) -> String {
        format!("kindergarten-{}-{}@{}", self.event_type, index, domain)
    }
}

/// The whole input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarData {
    #[serde(default)]
    pub calendar_info: CalendarInfo,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl CalendarData {
    pub fn from_json(json: &str) -> KitacalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse the calendar file at `path`.
    pub fn load(path: &Path) -> KitacalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| KitacalError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| KitacalError::ParseInput {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in dataset used by the spreadsheet export when no input can be read.
    pub fn sample() -> Self {
        CalendarData {
            calendar_info: CalendarInfo::default(),
            events: vec![Event {
                name: "Weihnachtsferien".to_string(),
                description: "Kindergarten geschlossen".to_string(),
                start: "2025-01-03".to_string(),
                end: "2025-01-03".to_string(),
                event_type: EventType::Closure,
                category: "holiday".to_string(),
            }],
        }
    }
}
