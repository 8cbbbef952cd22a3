//! ICS subscription file generation.
//!
//! Built with the `icalendar` crate, which handles escaping and line folding.
//! The calendar-level extension properties (`X-WR-*`, `REFRESH-INTERVAL`) and
//! the per-event `COLOR` are added as plain properties.

mod generate;
mod style;

pub use generate::{generate_ics, write_ics};
pub use style::{DEFAULT_COLOR, Transparency, event_color, event_description};
