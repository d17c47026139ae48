//! Run statistics and result structures for the activity pipeline

use crate::app::services::trip_stats::ActivityReport;

/// Counts gathered across the stages of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Rows handed to the validator
    pub rows_read: usize,
    /// Valid events collected
    pub events_collected: usize,
    /// Trips formed by the pairer
    pub trips_paired: usize,
    /// Trips also attributed to a station
    pub station_trips: usize,
    /// Trips whose arrival preceded their departure
    pub implausible_trips: usize,
    /// Bikes with at least one trip
    pub bikes_reported: usize,
    /// Stations with at least one trip
    pub stations_reported: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips formed per hundred collected events
    pub fn pairing_rate(&self) -> f64 {
        if self.events_collected == 0 {
            0.0
        } else {
            (self.trips_paired as f64 / self.events_collected as f64) * 100.0
        }
    }

    pub fn has_implausible_trips(&self) -> bool {
        self.implausible_trips > 0
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} rows -> {} events -> {} trips ({} at same station) | \
             Pairing rate: {:.1}% | Bikes: {} | Stations: {} | Implausible trips: {}",
            self.rows_read,
            self.events_collected,
            self.trips_paired,
            self.station_trips,
            self.pairing_rate(),
            self.bikes_reported,
            self.stations_reported,
            self.implausible_trips
        )
    }
}

/// Report produced by a run together with its statistics
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub report: ActivityReport,
    pub stats: ProcessingStats,
}

impl PipelineResult {
    pub fn new(report: ActivityReport, stats: ProcessingStats) -> Self {
        Self { report, stats }
    }
}
