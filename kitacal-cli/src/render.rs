//! Terminal rendering for kitacal-core types.
//!
//! Extension traits that add colored output with owo_colors.

use kitacal_core::CalendarSummary;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarSummary {
    fn render(&self) -> String {
        let mut lines = vec![
            "Calendar Summary:".bold().to_string(),
            format!("Total events: {}", self.total_events),
            format!("Calendar name: {}", self.calendar_name),
        ];

        match self.refresh_interval_human() {
            Some(human) => lines.push(format!(
                "Refresh interval: {} {}",
                self.refresh_interval,
                format!("({human})").dimmed()
            )),
            None => lines.push(format!("Refresh interval: {}", self.refresh_interval)),
        }

        if !self.by_type.is_empty() {
            lines.push(String::new());
            lines.push("Events by type:".bold().to_string());
            for (event_type, count) in &self.by_type {
                lines.push(format!("{event_type}: {count}"));
            }
        }

        lines.join("\n")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
