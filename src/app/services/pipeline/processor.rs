//! Pipeline orchestration: collect, pair, aggregate, report
//!
//! All state for a run is created inside [`ActivityPipeline::run_reader`] and
//! returned in the [`PipelineResult`]; nothing outlives the call.

use super::stats::{PipelineResult, ProcessingStats};
use crate::Result;
use crate::app::models::TripValidity;
use crate::app::services::journey_parser::EventCollector;
use crate::app::services::trip_pairer::TripPairer;
use crate::app::services::trip_stats::{ActivityReport, TripAggregator};
use crate::config::Config;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs the whole validation-and-aggregation pipeline once
///
/// # Example
///
/// ```rust
/// use bikeshare_stats::app::services::pipeline::ActivityPipeline;
/// use bikeshare_stats::Config;
///
/// let data = "1,1,,20200101T10:00:00\n1,1,20200101T10:30:00,\n";
/// let result = ActivityPipeline::new(Config::default()).run_reader(data.as_bytes())?;
///
/// assert_eq!(result.report.bikes[0].average, "00:30:00");
/// # Ok::<(), bikeshare_stats::StatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActivityPipeline {
    config: Config,
}

impl ActivityPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run against a CSV file on disk
    pub fn run_path(&self, path: &Path) -> Result<PipelineResult> {
        let collector = EventCollector::from_path(path)?;
        self.run_collected(collector)
    }

    /// Run against any CSV byte stream
    pub fn run_reader<R: Read>(&self, reader: R) -> Result<PipelineResult> {
        let collector = EventCollector::from_reader(reader)?;
        self.run_collected(collector)
    }

    fn run_collected(&self, collector: EventCollector) -> Result<PipelineResult> {
        let mut stats = ProcessingStats {
            rows_read: collector.rows_read(),
            events_collected: collector.len(),
            ..Default::default()
        };
        info!("Collected {} valid events", stats.events_collected);

        let pairer = TripPairer::new(self.config.sort_order);
        debug!("Pairing events using {:?} order", pairer.sort_order());
        let trips = pairer.pair(collector.into_events())?;

        stats.trips_paired = trips.len();
        stats.implausible_trips = trips
            .iter()
            .filter(|trip| trip.validity() == TripValidity::NegativeDuration)
            .count();
        info!("Paired {} trips", stats.trips_paired);

        if stats.has_implausible_trips() {
            warn!(
                "{} trips have negative durations; input ordering assumptions do not hold",
                stats.implausible_trips
            );
        }

        let mut aggregator = TripAggregator::new();
        aggregator.record_all(&trips);
        stats.station_trips = aggregator.station_trip_count();

        let report = ActivityReport::from_aggregator(&aggregator, self.config.sort_order)?;
        stats.bikes_reported = report.bikes.len();
        stats.stations_reported = report.stations.len();

        info!("{}", stats.summary());
        Ok(PipelineResult::new(report, stats))
    }
}
