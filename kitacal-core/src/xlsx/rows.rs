//! Flattening events into fixed-column rows.

use crate::event::Event;
use crate::time::split_date_time;

/// Column headers, in output order.
pub const HEADERS: [&str; 8] = [
    "Name",
    "Description",
    "Start Date",
    "End Date",
    "Start Time",
    "End Time",
    "Type",
    "Category",
];

/// Column width hints in characters, aligned with [`HEADERS`].
pub const COLUMN_WIDTHS: [u16; 8] = [30, 50, 12, 12, 10, 10, 15, 15];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// Empty for date-only input
    pub start_time: String,
    /// Empty for date-only input
    pub end_time: String,
    pub event_type: String,
    pub category: String,
}

impl SheetRow {
    pub fn from_event(event: &Event) -> Self {
        let start = split_date_time(&event.start);
        let end = split_date_time(&event.end);

        SheetRow {
            name: event.name.clone(),
            description: event.description.clone(),
            start_date: start.date,
            end_date: end.date,
            start_time: start.time,
            end_time: end.time,
            event_type: event.event_type.to_string(),
            category: event.category.clone(),
        }
    }

    /// Cell values in column order.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.name,
            &self.description,
            &self.start_date,
            &self.end_date,
            &self.start_time,
            &self.end_time,
            &self.event_type,
            &self.category,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{CalendarData, EventType};

    #[test]
    fn test_timed_event_row() {
        let event = Event {
            name: "Elternabend".to_string(),
            description: "Im Gruppenraum".to_string(),
            start: "2025-02-10T19:30:00".to_string(),
            end: "2025-02-10T21:00:00".to_string(),
            event_type: EventType::Meeting,
            category: "parents".to_string(),
        };

        let row = SheetRow::from_event(&event);

        assert_eq!(
            row.cells(),
            [
                "Elternabend",
                "Im Gruppenraum",
                "2025-02-10",
                "2025-02-10",
                "19:30",
                "21:00",
                "meeting",
                "parents",
            ]
        );
    }

    #[test]
    fn test_all_day_row_has_empty_times() {
        let row = SheetRow::from_event(&CalendarData::sample().events[0]);

        assert_eq!(row.start_date, "2025-01-03");
        assert_eq!(row.end_date, "2025-01-03");
        assert_eq!(row.start_time, "");
        assert_eq!(row.end_time, "");
        assert_eq!(row.event_type, "closure");
    }

    #[test]
    fn test_headers_and_widths_align() {
        assert_eq!(HEADERS.len(), COLUMN_WIDTHS.len());
        assert_eq!(HEADERS[4], "Start Time");
        assert_eq!(COLUMN_WIDTHS[1], 50);
    }
}
