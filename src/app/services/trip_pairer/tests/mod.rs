//! Test utilities for trip pairing

use crate::app::models::JourneyEvent;
use crate::app::services::journey_parser::validate_record;


/// Build a validated event from raw field text
pub fn event(line: usize, station: &str, bike: &str, arrival: &str, departure: &str) -> JourneyEvent {
    validate_record(&[station, bike, arrival, departure], line).unwrap()
}
