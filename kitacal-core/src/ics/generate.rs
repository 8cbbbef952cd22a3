//! ICS document assembly.

use std::path::Path;

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, EventLike, EventStatus, Property, ValueType};

use super::style::{Transparency, event_color, event_description};
use crate::config::{IcsSettings, TimedEventStyle};
use crate::error::{KitacalError, KitacalResult};
use crate::event::{CalendarData, CalendarInfo, Event};
use crate::time::{EventTime, exclusive_end, format_dtstamp, format_ics_date, format_ics_datetime};

/// Generate the full subscription calendar.
///
/// `now` becomes the `DTSTAMP` of every event. Nothing is returned unless
/// every event could be rendered.
pub fn generate_ics(
    data: &CalendarData,
    settings: &IcsSettings,
    now: DateTime<Utc>,
) -> KitacalResult<String> {
    let info = &data.calendar_info;
    if info.timezone.parse::<chrono_tz::Tz>().is_err() {
        log::warn!("Unknown timezone '{}' in calendar_info", info.timezone);
    }

    let dtstamp = format_dtstamp(now);
    let mut cal = Calendar::new();
    add_calendar_properties(&mut cal, info);

    for (index, event) in data.events.iter().enumerate() {
        log::debug!("Rendering event {index}: {}", event.name);
        cal.push(build_event(event, index, info, settings, &dtstamp)?);
    }

    let cal = cal.done();

    Ok(finish_ics(&cal.to_string(), settings))
}

/// Generate the calendar and write it to `path` in a single call.
///
/// Returns the number of events written.
pub fn write_ics(
    data: &CalendarData,
    path: &Path,
    settings: &IcsSettings,
    now: DateTime<Utc>,
) -> KitacalResult<usize> {
    let content = generate_ics(data, settings, now)?;

    std::fs::write(path, content).map_err(|source| KitacalError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} events to {}", data.events.len(), path.display());

    Ok(data.events.len())
}

/// `VERSION`, `PRODID` and `CALSCALE` come from `Calendar::new()`.
fn add_calendar_properties(cal: &mut Calendar, info: &CalendarInfo) {
    cal.append_property(Property::new("X-WR-CALNAME", &info.name));
    cal.append_property(Property::new("X-WR-TIMEZONE", &info.timezone));
    cal.append_property(Property::new("X-WR-CALDESC", &info.description));

    let mut refresh = Property::new("REFRESH-INTERVAL", &info.refresh_interval);
    refresh.add_parameter("VALUE", "DURATION");
    cal.append_property(refresh);

    cal.append_property(Property::new("X-PUBLISHED-TTL", &info.refresh_interval));
    cal.append_property(Property::new("METHOD", "PUBLISH"));
}

fn build_event(
    event: &Event,
    index: usize,
    info: &CalendarInfo,
    settings: &IcsSettings,
    dtstamp: &str,
) -> KitacalResult<icalendar::Event> {
    let start = EventTime::parse(&event.start)?;
    let end = EventTime::parse(&event.end)?;

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid(index, &settings.uid_domain));
    ics_event.add_property("DTSTAMP", dtstamp);

    if event.is_all_day() {
        add_date_property(&mut ics_event, "DTSTART", &format_ics_date(start.date()));
        add_date_property(&mut ics_event, "DTEND", &format_ics_date(exclusive_end(end.date())?));
    } else {
        add_timed_property(&mut ics_event, "DTSTART", &start, settings.timed_events, &info.timezone);
        add_timed_property(&mut ics_event, "DTEND", &end, settings.timed_events, &info.timezone);
    }

    ics_event.summary(&plain_newlines(&event.name));
    ics_event.description(&plain_newlines(&event_description(event)));
    ics_event.location(&settings.location);

    // One CATEGORIES line per value; a joined list would get its comma escaped
    ics_event.append_multi_property(Property::new("CATEGORIES", event.event_type.as_str()));
    if !event.category.is_empty() {
        ics_event.append_multi_property(Property::new("CATEGORIES", &event.category));
    }

    ics_event.add_property("COLOR", event_color(&event.event_type, &event.category));
    ics_event.status(EventStatus::Confirmed);
    ics_event.add_property("TRANSP", Transparency::for_type(&event.event_type).as_ics_str());

    Ok(ics_event.done())
}

fn add_date_property(ics_event: &mut icalendar::Event, name: &str, value: &str) {
    let mut prop = Property::new(name, value);
    prop.append_parameter(ValueType::Date);
    ics_event.append_property(prop);
}

/// Add a timed DTSTART/DTEND according to the configured style.
fn add_timed_property(
    ics_event: &mut icalendar::Event,
    name: &str,
    time: &EventTime,
    style: TimedEventStyle,
    tzid: &str,
) {
    let value = format_ics_datetime(time.to_naive_datetime());

    match style {
        TimedEventStyle::UtcSuffix => {
            ics_event.add_property(name, format!("{value}Z"));
        }
        TimedEventStyle::Floating => {
            ics_event.add_property(name, value);
        }
        TimedEventStyle::Tzid => {
            let mut prop = Property::new(name, value);
            prop.add_parameter("TZID", tzid);
            ics_event.append_property(prop);
        }
    }
}

/// `\r\n` in the input counts as a single newline.
fn plain_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Clean up ICS output from the icalendar crate
/// - Replace the crate's PRODID with the configured one
/// - Undo line folding when `fold_lines` is off
fn finish_ics(ics: &str, settings: &IcsSettings) -> String {
    let ics = if settings.fold_lines {
        ics.to_string()
    } else {
        icalendar::parser::unfold(ics)
    };

    let mut result = String::with_capacity(ics.len());
    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(&settings.prod_id);
            result.push_str("\r\n");
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
