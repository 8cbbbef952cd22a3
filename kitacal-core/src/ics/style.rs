//! Per-event presentation: color, annotated description, transparency.

use crate::event::{Event, EventType};

/// Color for types without an entry in the table.
pub const DEFAULT_COLOR: &str = "#808080";

const CLOSED_MARKER: &str = "GESCHLOSSEN";
const REGISTRATION_MARKER: &str = "Anmeldung erforderlich";

/// Resolve the display color: exact (type, category) match, then the
/// type's default, then [`DEFAULT_COLOR`].
pub fn event_color(event_type: &EventType, category: &str) -> &'static str {
    match (event_type, category) {
        (EventType::Closure, "holiday") => "#FF0000",
        (EventType::Closure, "bridgeday") => "#FF6666",
        (EventType::Closure, "early_closure") => "#FFA07A",
        (EventType::Closure, _) => "#FF4444",

        (EventType::Meeting, "board") => "#4169E1",
        (EventType::Meeting, "parents") => "#6495ED",
        (EventType::Meeting, "members") => "#1E90FF",
        (EventType::Meeting, _) => "#4682B4",

        (EventType::Event, "celebration") => "#32CD32",
        (EventType::Event, "activity") => "#90EE90",
        (EventType::Event, "organization") => "#98FB98",
        (EventType::Event, _) => "#3CB371",

        (EventType::HolidayCare, _) => "#FFD700",

        (EventType::Other(_), _) => DEFAULT_COLOR,
    }
}

/// Description with the closure and registration annotations appended.
pub fn event_description(event: &Event) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);

    if !event.description.is_empty() {
        parts.push(&event.description);
    }
    if event.event_type == EventType::Closure {
        parts.push(CLOSED_MARKER);
    }
    if event.category == "holiday_care" {
        parts.push(REGISTRATION_MARKER);
    }

    parts.join(" - ")
}

/// Event transparency (busy/free status)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Event blocks time on calendar
    Opaque,
    /// Event does not block time (shows as free)
    Transparent,
}

impl Transparency {
    /// Closures do not block time for subscribers.
    pub fn for_type(event_type: &EventType) -> Self {
        if *event_type == EventType::Closure {
            Transparency::Transparent
        } else {
            Transparency::Opaque
        }
    }

    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Transparency::Opaque => "OPAQUE",
            Transparency::Transparent => "TRANSPARENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, category: &str, description: &str) -> Event {
        Event {
            name: "Test".to_string(),
            description: description.to_string(),
            start: "2025-01-03".to_string(),
            end: "2025-01-03".to_string(),
            event_type: EventType::from(event_type),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_color_exact_match() {
        assert_eq!(event_color(&EventType::Closure, "holiday"), "#FF0000");
        assert_eq!(event_color(&EventType::Meeting, "board"), "#4169E1");
        assert_eq!(event_color(&EventType::Event, "organization"), "#98FB98");
    }

    #[test]
    fn test_color_falls_back_to_type_default() {
        assert_eq!(event_color(&EventType::Closure, "unknown"), "#FF4444");
        assert_eq!(event_color(&EventType::Meeting, ""), "#4682B4");
        assert_eq!(event_color(&EventType::HolidayCare, "summer"), "#FFD700");
    }

    #[test]
    fn test_color_falls_back_to_global_default() {
        assert_eq!(event_color(&EventType::from("unknown"), "holiday"), "#808080");
    }

    #[test]
    fn test_description_closure_and_holiday_care() {
        let e = event("closure", "holiday_care", "Sommerpause");
        assert_eq!(
            event_description(&e),
            "Sommerpause - GESCHLOSSEN - Anmeldung erforderlich"
        );
    }

    #[test]
    fn test_description_single_annotation() {
        assert_eq!(
            event_description(&event("closure", "holiday", "Ferien")),
            "Ferien - GESCHLOSSEN"
        );
        assert_eq!(
            event_description(&event("holiday_care", "holiday_care", "Notgruppe")),
            "Notgruppe - Anmeldung erforderlich"
        );
        assert_eq!(
            event_description(&event("meeting", "parents", "Elternabend")),
            "Elternabend"
        );
    }

    #[test]
    fn test_description_without_base_text() {
        assert_eq!(event_description(&event("closure", "holiday", "")), "GESCHLOSSEN");
    }

    #[test]
    fn test_transparency() {
        assert_eq!(Transparency::for_type(&EventType::Closure), Transparency::Transparent);
        assert_eq!(Transparency::for_type(&EventType::Meeting), Transparency::Opaque);
        assert_eq!(Transparency::Transparent.as_ics_str(), "TRANSPARENT");
    }
}
