//! Trip pairing for collected journey events
//!
//! Events are sorted by station, bike and timestamps, then scanned with a
//! two-element window. A window whose events share a bike forms a trip
//! lasting from the earlier departure to the later arrival; the trip also
//! counts for the station when both events share it.
//!
//! - [`sort_key`] - Numeric and legacy textual orderings
//! - [`pairer`] - The sliding-window scan

pub mod pairer;
pub mod sort_key;

#[cfg(test)]
mod tests;

pub use pairer::TripPairer;
pub use sort_key::{compare_identifiers, sort_events};
