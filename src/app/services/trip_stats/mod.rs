//! Trip statistics: aggregation and reporting
//!
//! - [`aggregator`] - Running totals per bike and per station
//! - [`report`] - Average durations, ordering and output rendering

pub mod aggregator;
pub mod report;

#[cfg(test)]
mod tests;

pub use aggregator::TripAggregator;
pub use report::{ActivityReport, BucketSummary, Dimension, format_average};
