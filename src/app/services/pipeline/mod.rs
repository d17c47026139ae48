//! End-to-end activity pipeline
//!
//! Data flows one way through the stages, once per run:
//!
//! 1. **Collection**: read and validate every row ([`journey_parser`](super::journey_parser))
//! 2. **Pairing**: sort events and form trips ([`trip_pairer`](super::trip_pairer))
//! 3. **Aggregation**: accumulate per-bike and per-station buckets ([`trip_stats`](super::trip_stats))
//! 4. **Reporting**: compute averages in identifier order
//!
//! Any failure aborts the run; no partial report is produced.

pub mod processor;
pub mod stats;

#[cfg(test)]
mod tests;

pub use processor::ActivityPipeline;
pub use stats::{PipelineResult, ProcessingStats};
