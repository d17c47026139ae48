//! Test utilities for trip statistics

use crate::app::models::Trip;
use crate::app::services::journey_parser::validate_record;
use crate::app::services::trip_pairer::TripPairer;

mod aggregator_tests;

/// Pair raw `(station, bike, arrival, departure)` rows into trips
pub fn trips_from_rows(rows: &[[&str; 4]]) -> Vec<Trip> {
    let events = rows
        .iter()
        .enumerate()
        .map(|(index, row)| validate_record(&row[..], index + 1).unwrap())
        .collect();

    TripPairer::default().pair(events).unwrap()
}
