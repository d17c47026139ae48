//! Bikeshare Stats Library
//!
//! Validates bike rental station event CSV files and computes, per bike and
//! per station, the number and average duration of completed trips.
//!
//! This library provides tools for:
//! - Validating `station_id,bike_id,arrival,departure` rows with line-accurate diagnostics
//! - Collecting valid events in memory
//! - Pairing adjacent events of the same bike into trips
//! - Accumulating per-bike and per-station duration totals
//! - Reporting average trip durations as `HH:MM:SS`

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod journey_parser;
        pub mod pipeline;
        pub mod trip_pairer;
        pub mod trip_stats;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Identifier, JourneyEvent, StatBucket, Trip, TripValidity};
pub use app::services::pipeline::{ActivityPipeline, PipelineResult, ProcessingStats};
pub use app::services::trip_stats::ActivityReport;
pub use config::{Config, OutputFormat, SortOrder};
pub use error::{Result, StatsError, TimestampSide, ValidationErrorKind};
