//! Row validation for journey events
//!
//! Rules are applied in order and the first failure wins:
//! column count, station id, bike id, arrival, departure, then the
//! requirement that at least one timestamp is present.

use crate::app::models::{Identifier, JourneyEvent};
use crate::constants::{
    BIKE_ID_PATTERN, EXPECTED_COLUMNS, MAX_BIKE_ID, MAX_STATION_ID, MIN_IDENTIFIER,
    STATION_ID_PATTERN, TIMESTAMP_FORMAT, TIMESTAMP_PATTERN, columns,
};
use crate::error::{Result, StatsError, ValidationErrorKind};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static STATION_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STATION_ID_PATTERN).expect("station id pattern compiles"));

static BIKE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(BIKE_ID_PATTERN).expect("bike id pattern compiles"));

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern compiles"));

/// Validate one raw row
///
/// # Arguments
///
/// * `fields` - The row's fields in source order
/// * `line` - 1-based line number of the row in the source file
pub fn validate_record<S: AsRef<str>>(fields: &[S], line: usize) -> Result<JourneyEvent> {
    let reject = |kind| StatsError::invalid_record(line, kind);

    if fields.len() != EXPECTED_COLUMNS {
        return Err(reject(ValidationErrorKind::MalformedRow {
            found: fields.len(),
        }));
    }

    let field = |index: usize| fields[index].as_ref();

    let station_id = parse_identifier(field(columns::STATION_ID), &STATION_ID_RE, MAX_STATION_ID)
        .ok_or_else(|| reject(ValidationErrorKind::InvalidStationId))?;

    let bike_id = parse_identifier(field(columns::BIKE_ID), &BIKE_ID_RE, MAX_BIKE_ID)
        .ok_or_else(|| reject(ValidationErrorKind::InvalidBikeId))?;

    let arrival = parse_timestamp(field(columns::ARRIVAL))
        .map_err(|_| reject(ValidationErrorKind::InvalidArrivalTimestamp))?;

    let departure = parse_timestamp(field(columns::DEPARTURE))
        .map_err(|_| reject(ValidationErrorKind::InvalidDepartureTimestamp))?;

    JourneyEvent::new(line, station_id, bike_id, arrival, departure)
        .ok_or_else(|| reject(ValidationErrorKind::EmptyTimestampPair))
}

/// Parse a bounded decimal identifier, keeping its source text
fn parse_identifier(value: &str, pattern: &Regex, max: u32) -> Option<Identifier> {
    if !pattern.is_match(value) {
        return None;
    }

    let parsed = value.parse::<u32>().ok()?;
    (MIN_IDENTIFIER..=max)
        .contains(&parsed)
        .then(|| Identifier::new(parsed, value))
}

/// Parse an optional timestamp field; empty means absent
fn parse_timestamp(value: &str) -> std::result::Result<Option<NaiveDateTime>, InvalidTimestamp> {
    if value.is_empty() {
        return Ok(None);
    }

    if !TIMESTAMP_RE.is_match(value) {
        return Err(InvalidTimestamp);
    }

    // The pattern admits impossible dates such as month 13
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(Some)
        .map_err(|_| InvalidTimestamp)
}

#[derive(Debug)]
struct InvalidTimestamp;
