//! Run summary printed after generating a calendar.

use crate::event::CalendarData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSummary {
    pub total_events: usize,
    pub calendar_name: String,
    /// Raw ISO-8601 duration from the input
    pub refresh_interval: String,
    /// Event count per type, in order of first appearance
    pub by_type: Vec<(String, usize)>,
}

impl CalendarSummary {
    pub fn from_data(data: &CalendarData) -> Self {
        let mut by_type: Vec<(String, usize)> = Vec::new();

        for event in &data.events {
            let name = event.event_type.as_str();
            match by_type.iter_mut().find(|(t, _)| t == name) {
                Some((_, count)) => *count += 1,
                None => by_type.push((name.to_string(), 1)),
            }
        }

        CalendarSummary {
            total_events: data.events.len(),
            calendar_name: data.calendar_info.name.clone(),
            refresh_interval: data.calendar_info.refresh_interval.clone(),
            by_type,
        }
    }

    /// The refresh interval as a human readable duration, e.g. "1day".
    ///
    /// `None` if the interval is not a valid ISO-8601 duration.
    pub fn refresh_interval_human(&self) -> Option<String> {
        match iso8601::duration(&self.refresh_interval) {
            Ok(duration) => {
                let std_duration: std::time::Duration = duration.into();
                Some(humantime::format_duration(std_duration).to_string())
            }
            Err(e) => {
                log::warn!(
                    "Refresh interval '{}' is not an ISO-8601 duration: {e}",
                    self.refresh_interval
                );
                None
            }
        }
    }
}
