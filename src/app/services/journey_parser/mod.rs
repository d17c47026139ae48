//! Journey event parser for bike station CSV files
//!
//! Turns raw `station_id,bike_id,arrival,departure` rows into validated
//! [`JourneyEvent`](crate::app::models::JourneyEvent)s. The first invalid row
//! aborts the whole read; no rows are skipped.
//!
//! ## Architecture
//!
//! - [`validator`] - Per-row validation rules, checked in a fixed order
//! - [`collector`] - CSV reading and in-memory collection of valid events
//!
//! ## Usage
//!
//! ```rust
//! use bikeshare_stats::app::services::journey_parser::EventCollector;
//!
//! let data = "1,1,,20200101T10:00:00\n1,1,20200101T10:30:00,\n";
//! let collector = EventCollector::from_reader(data.as_bytes())?;
//! assert_eq!(collector.len(), 2);
//! # Ok::<(), bikeshare_stats::StatsError>(())
//! ```

pub mod collector;
pub mod validator;

#[cfg(test)]
mod tests;

pub use collector::EventCollector;
pub use validator::validate_record;
