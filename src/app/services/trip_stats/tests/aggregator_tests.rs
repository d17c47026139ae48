//! Tests for per-bike and per-station accumulation

use super::trips_from_rows;
use crate::app::models::Identifier;
use crate::app::services::trip_stats::TripAggregator;

#[test]
fn test_same_station_trip_counts_for_bike_and_station() {
    let trips = trips_from_rows(&[
        ["1", "1", "", "20200101T10:00:00"],
        ["1", "1", "20200101T10:30:00", ""],
    ]);

    let mut aggregator = TripAggregator::new();
    aggregator.record_all(&trips);

    let bike = aggregator.bike_bucket(&Identifier::from_value(1)).unwrap();
    assert_eq!(bike.total_seconds, 1800);
    assert_eq!(bike.trip_count, 1);

    let station = aggregator.station_bucket(&Identifier::from_value(1)).unwrap();
    assert_eq!(station.total_seconds, 1800);
    assert_eq!(station.trip_count, 1);
}

#[test]
fn test_cross_station_trip_counts_for_bike_only() {
    let trips = trips_from_rows(&[
        ["3", "7", "", "20200101T08:00:00"],
        ["4", "7", "20200101T08:20:00", ""],
    ]);

    let mut aggregator = TripAggregator::new();
    aggregator.record_all(&trips);

    assert_eq!(aggregator.bikes().len(), 1);
    assert!(aggregator.stations().is_empty());
    assert_eq!(aggregator.station_trip_count(), 0);
}

#[test]
fn test_totals_are_exact_sums() {
    let trips = trips_from_rows(&[
        ["1", "1", "", "20200101T10:00:00"],
        ["1", "1", "20200101T10:30:00", "20200101T10:40:00"],
        ["1", "1", "20200101T11:00:00", ""],
        ["2", "8", "", "20200101T07:00:00"],
        ["2", "8", "20200101T07:00:59", ""],
    ]);

    let mut aggregator = TripAggregator::new();
    aggregator.record_all(&trips);

    let bike_one = aggregator.bike_bucket(&Identifier::from_value(1)).unwrap();
    assert_eq!(bike_one.total_seconds, 1800 + 1200);
    assert_eq!(bike_one.trip_count, 2);

    let bike_eight = aggregator.bike_bucket(&Identifier::from_value(8)).unwrap();
    assert_eq!(bike_eight.total_seconds, 59);
    assert_eq!(bike_eight.trip_count, 1);

    assert_eq!(aggregator.station_trip_count(), 3);
    assert_eq!(
        aggregator
            .station_bucket(&Identifier::from_value(1))
            .unwrap()
            .total_seconds,
        3000
    );
}

#[test]
fn test_implausible_trips_still_contribute() {
    let trips = trips_from_rows(&[
        ["1", "1", "", "20200101T12:00:00"],
        ["1", "1", "20200101T10:00:00", ""],
    ]);

    let mut aggregator = TripAggregator::new();
    aggregator.record_all(&trips);

    let bike = aggregator.bike_bucket(&Identifier::from_value(1)).unwrap();
    assert_eq!(bike.total_seconds, -7200);
    assert_eq!(bike.trip_count, 1);
    assert_eq!(bike.implausible_trips, 1);
}

#[test]
fn test_lookup_is_by_numeric_value() {
    let trips = trips_from_rows(&[
        ["01", "007", "", "20200101T10:00:00"],
        ["01", "007", "20200101T10:10:00", ""],
    ]);

    let mut aggregator = TripAggregator::new();
    aggregator.record_all(&trips);

    assert!(aggregator.bike_bucket(&Identifier::from_value(7)).is_some());
    assert!(aggregator.station_bucket(&Identifier::from_value(1)).is_some());
}
