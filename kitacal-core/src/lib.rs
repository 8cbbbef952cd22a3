//! Core types for kitacal.
//!
//! This crate turns a kindergarten calendar described in JSON into the two
//! published artifacts:
//! - an iCalendar subscription file (`ics` module)
//! - a single-sheet spreadsheet export (`xlsx` module)
//!
//! Both pipelines read the same [`CalendarData`] and share nothing else.

pub mod config;
pub mod error;
pub mod event;
pub mod ics;
pub mod summary;
pub mod time;
pub mod xlsx;

pub use config::{Config, IcsSettings, TimedEventStyle, XlsxSettings};
pub use error::{KitacalError, KitacalResult};
pub use event::{CalendarData, CalendarInfo, Event, EventType};
pub use summary::CalendarSummary;

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT_FILE: &str = "kindergarten_calendar.json";
/// Default ICS output file.
pub const DEFAULT_ICS_FILE: &str = "kindergarten_calendar.ics";
/// Default XLSX output file.
pub const DEFAULT_XLSX_FILE: &str = "kindergarten_calendar.xlsx";
