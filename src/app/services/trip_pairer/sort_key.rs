//! Orderings applied to events before pairing and to identifiers in reports

use crate::app::models::{Identifier, JourneyEvent};
use crate::config::SortOrder;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

type NumericKey = (u32, u32, Option<NaiveDateTime>, Option<NaiveDateTime>);
type TextualKey = (String, String, String, String);

/// Sort events by station, then bike, then arrival, then departure
///
/// Absent timestamps sort before present ones under both orderings. The sort
/// is stable.
pub fn sort_events(events: &mut [JourneyEvent], order: SortOrder) {
    match order {
        SortOrder::Numeric => events.sort_by_key(numeric_key),
        SortOrder::Textual => events.sort_by_cached_key(textual_key),
    }
}

/// Compare two identifiers for report ordering
pub fn compare_identifiers(a: &Identifier, b: &Identifier, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Numeric => a.cmp(b),
        SortOrder::Textual => a.text().cmp(b.text()).then_with(|| a.cmp(b)),
    }
}

fn numeric_key(event: &JourneyEvent) -> NumericKey {
    (
        event.station_id().value(),
        event.bike_id().value(),
        event.arrival(),
        event.departure(),
    )
}

fn textual_key(event: &JourneyEvent) -> TextualKey {
    (
        event.station_id().text().to_string(),
        event.bike_id().text().to_string(),
        event.arrival_text(),
        event.departure_text(),
    )
}
