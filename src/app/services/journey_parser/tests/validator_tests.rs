//! Tests for row validation rules

use crate::app::services::journey_parser::validate_record;
use crate::error::{StatsError, ValidationErrorKind};

fn rejection(fields: &[&str], line: usize) -> (usize, ValidationErrorKind) {
    match validate_record(fields, line) {
        Err(StatsError::InvalidRecord { line, kind }) => (line, kind),
        other => panic!("expected a rejected row, got {:?}", other),
    }
}

#[test]
fn test_accepts_departure_only_row() {
    let event = validate_record(&["1", "1", "", "20200101T10:00:00"], 1).unwrap();

    assert_eq!(event.line(), 1);
    assert_eq!(event.station_id().value(), 1);
    assert_eq!(event.bike_id().value(), 1);
    assert!(event.arrival().is_none());
    assert_eq!(event.departure_text(), "20200101T10:00:00");
}

#[test]
fn test_accepts_boundary_identifiers() {
    let event = validate_record(&["1000", "10000", "20211231T23:59:59", ""], 7).unwrap();
    assert_eq!(event.station_id().value(), 1000);
    assert_eq!(event.bike_id().value(), 10000);

    let padded = validate_record(&["0042", "00007", "20200101T00:00:00", ""], 8).unwrap();
    assert_eq!(padded.station_id().value(), 42);
    assert_eq!(padded.station_id().text(), "0042");
    assert_eq!(padded.bike_id().value(), 7);
}

#[test]
fn test_accepts_both_timestamps() {
    let event =
        validate_record(&["5", "12", "20200101T09:00:00", "20200101T09:15:00"], 2).unwrap();
    assert!(event.arrival().is_some());
    assert!(event.departure().is_some());
}

#[test]
fn test_rejects_wrong_column_count() {
    assert_eq!(
        rejection(&["1", "1", "20200101T10:00:00"], 5),
        (5, ValidationErrorKind::MalformedRow { found: 3 })
    );
    assert_eq!(
        rejection(&["1", "1", "", "20200101T10:00:00", "extra"], 2),
        (2, ValidationErrorKind::MalformedRow { found: 5 })
    );
}

#[test]
fn test_rejects_invalid_station_ids() {
    for station in ["", "abc", "1001", "10000", "-1", " 1", "0"] {
        assert_eq!(
            rejection(&[station, "1", "", "20200101T10:00:00"], 3),
            (3, ValidationErrorKind::InvalidStationId),
            "station {:?}",
            station
        );
    }
}

#[test]
fn test_rejects_invalid_bike_ids() {
    for bike in ["", "x1", "10001", "100000", "0", "1.5"] {
        assert_eq!(
            rejection(&["1", bike, "", "20200101T10:00:00"], 4),
            (4, ValidationErrorKind::InvalidBikeId),
            "bike {:?}",
            bike
        );
    }
}

#[test]
fn test_rejects_invalid_arrival() {
    for arrival in [
        "2020-01-01T10:00:00",
        "19990101T10:00:00",
        "20200101 10:00:00",
        "20201301T10:00:00",
        "20200101T25:00:00",
    ] {
        assert_eq!(
            rejection(&["1", "1", arrival, ""], 6),
            (6, ValidationErrorKind::InvalidArrivalTimestamp),
            "arrival {:?}",
            arrival
        );
    }
}

#[test]
fn test_rejects_invalid_departure() {
    assert_eq!(
        rejection(&["1", "1", "20200101T10:00:00", "2020"], 9),
        (9, ValidationErrorKind::InvalidDepartureTimestamp)
    );
}

#[test]
fn test_rejects_empty_timestamp_pair() {
    assert_eq!(
        rejection(&["1", "1", "", ""], 11),
        (11, ValidationErrorKind::EmptyTimestampPair)
    );
}

#[test]
fn test_first_failure_wins() {
    // Bad station, bad bike and both timestamps missing: station is checked first
    assert_eq!(
        rejection(&["5000", "99999", "", ""], 1),
        (1, ValidationErrorKind::InvalidStationId)
    );

    // Bad arrival is reported before the bad departure
    assert_eq!(
        rejection(&["1", "1", "bad", "bad"], 1),
        (1, ValidationErrorKind::InvalidArrivalTimestamp)
    );
}

#[test]
fn test_rejection_message_names_line_and_field() {
    let err = validate_record(&["1", "1", "", ""], 12).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid csv data on line 12: check empty timestamps"
    );
    assert_eq!(err.line(), Some(12));
    assert_eq!(
        err.validation_kind(),
        Some(ValidationErrorKind::EmptyTimestampPair)
    );
}
