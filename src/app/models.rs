//! Core data structures for bike activity processing.
//!
//! Defines validated journey events, the trips derived from adjacent events,
//! and the per-identifier accumulators the report is built from.

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{Result, StatsError, TimestampSide};
use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Station or bike identifier
///
/// Carries the parsed integer together with the text it was read from.
/// Equality, hashing and ordering use the integer only; the text is kept for
/// the legacy lexicographic sort order.
#[derive(Debug, Clone)]
pub struct Identifier {
    value: u32,
    text: String,
}

impl Identifier {
    pub fn new(value: u32, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }

    /// Identifier whose text is the canonical decimal form of `value`
    pub fn from_value(value: u32) -> Self {
        Self::new(value, value.to_string())
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Text as it appeared in the source row
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value)
    }
}

/// One validated row: an arrival and/or departure of a bike at a station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyEvent {
    line: usize,
    station_id: Identifier,
    bike_id: Identifier,
    arrival: Option<NaiveDateTime>,
    departure: Option<NaiveDateTime>,
}

impl JourneyEvent {
    /// Build an event; `None` when both timestamps are absent
    pub fn new(
        line: usize,
        station_id: Identifier,
        bike_id: Identifier,
        arrival: Option<NaiveDateTime>,
        departure: Option<NaiveDateTime>,
    ) -> Option<Self> {
        if arrival.is_none() && departure.is_none() {
            return None;
        }

        Some(Self {
            line,
            station_id,
            bike_id,
            arrival,
            departure,
        })
    }

    /// 1-based line in the source file
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn station_id(&self) -> &Identifier {
        &self.station_id
    }

    pub fn bike_id(&self) -> &Identifier {
        &self.bike_id
    }

    pub fn arrival(&self) -> Option<NaiveDateTime> {
        self.arrival
    }

    pub fn departure(&self) -> Option<NaiveDateTime> {
        self.departure
    }

    /// Arrival in source text form, empty when absent
    pub fn arrival_text(&self) -> String {
        format_timestamp(self.arrival)
    }

    /// Departure in source text form, empty when absent
    pub fn departure_text(&self) -> String {
        format_timestamp(self.departure)
    }
}

fn format_timestamp(timestamp: Option<NaiveDateTime>) -> String {
    timestamp
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

/// Whether a computed trip duration is physically plausible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TripValidity {
    Plausible,
    /// Next arrival precedes the departure; the input broke the ordering precondition
    NegativeDuration,
}

/// Completed trip between two adjacent events of the same bike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    bike_id: Identifier,
    station_id: Identifier,
    duration_seconds: i64,
    same_station: bool,
    validity: TripValidity,
}

impl Trip {
    /// Pair two adjacent events
    ///
    /// Returns `Ok(None)` when the events belong to different bikes. The
    /// duration is the later arrival minus the earlier departure, both of which
    /// must be present.
    pub(crate) fn between(earlier: &JourneyEvent, later: &JourneyEvent) -> Result<Option<Self>> {
        if earlier.bike_id != later.bike_id {
            return Ok(None);
        }

        let missing = |side| StatsError::MissingTimestampForPairing {
            side,
            bike_id: earlier.bike_id.value(),
            earlier_line: earlier.line,
            later_line: later.line,
        };

        let departed = earlier
            .departure
            .ok_or_else(|| missing(TimestampSide::Departure))?;
        let arrived = later
            .arrival
            .ok_or_else(|| missing(TimestampSide::Arrival))?;

        let duration_seconds = (arrived - departed).num_seconds();
        let validity = if duration_seconds < 0 {
            TripValidity::NegativeDuration
        } else {
            TripValidity::Plausible
        };

        Ok(Some(Self {
            bike_id: earlier.bike_id.clone(),
            station_id: earlier.station_id.clone(),
            duration_seconds,
            same_station: earlier.station_id == later.station_id,
            validity,
        }))
    }

    pub fn bike_id(&self) -> &Identifier {
        &self.bike_id
    }

    /// Station of the earlier event
    pub fn station_id(&self) -> &Identifier {
        &self.station_id
    }

    pub fn duration_seconds(&self) -> i64 {
        self.duration_seconds
    }

    /// Both events of the window were recorded at the same station
    pub fn is_same_station(&self) -> bool {
        self.same_station
    }

    pub fn validity(&self) -> TripValidity {
        self.validity
    }
}

/// Running duration total and trip count for one identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatBucket {
    pub total_seconds: i64,
    pub trip_count: usize,
    pub implausible_trips: usize,
}

impl StatBucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trip's duration; implausible trips still count towards totals
    pub fn record(&mut self, trip: &Trip) {
        self.total_seconds += trip.duration_seconds;
        self.trip_count += 1;
        if trip.validity == TripValidity::NegativeDuration {
            self.implausible_trips += 1;
        }
    }

    /// Mean duration in seconds, `None` for an empty bucket
    pub fn average_seconds(&self) -> Option<f64> {
        if self.trip_count == 0 {
            None
        } else {
            Some(self.total_seconds as f64 / self.trip_count as f64)
        }
    }
}
