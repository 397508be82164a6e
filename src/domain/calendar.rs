//! Calendar grouping of events by day.

use serde::Serialize;
use utoipa::ToSchema;

use super::Event;

/// All events sharing the same day prefix of their `datetime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CalendarDay {
    /// Day portion of the events' `datetime` (see [`Event::day`]).
    pub day: String,
    /// Events on this day, in list order.
    pub events: Vec<Event>,
}

/// Groups events into consecutive days.
///
/// Input is expected in `datetime` order, so equal day prefixes are
/// adjacent; a day only starts a new group when the prefix changes.
#[must_use]
pub fn group_by_day(events: Vec<Event>) -> Vec<CalendarDay> {
    let mut days: Vec<CalendarDay> = Vec::new();
    for event in events {
        if let Some(current) = days.last_mut().filter(|d| d.day == event.day()) {
            current.events.push(event);
            continue;
        }
        days.push(CalendarDay {
            day: event.day().to_string(),
            events: vec![event],
        });
    }
    days
}
