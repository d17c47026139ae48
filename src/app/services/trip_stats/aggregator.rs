//! Per-bike and per-station accumulation of trip durations

use crate::app::models::{Identifier, StatBucket, Trip};
use std::collections::HashMap;
use tracing::debug;

/// Owns the bike and station buckets for one run
///
/// Buckets are created on first contribution and only ever grow.
#[derive(Debug, Clone, Default)]
pub struct TripAggregator {
    bikes: HashMap<Identifier, StatBucket>,
    stations: HashMap<Identifier, StatBucket>,
}

impl TripAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute a trip to its bike, and to its station when both events share it
    pub fn record(&mut self, trip: &Trip) {
        self.bikes
            .entry(trip.bike_id().clone())
            .or_default()
            .record(trip);

        if trip.is_same_station() {
            self.stations
                .entry(trip.station_id().clone())
                .or_default()
                .record(trip);
        }
    }

    pub fn record_all<'a>(&mut self, trips: impl IntoIterator<Item = &'a Trip>) {
        for trip in trips {
            self.record(trip);
        }

        debug!(
            "Aggregated trips into {} bike and {} station buckets",
            self.bikes.len(),
            self.stations.len()
        );
    }

    pub fn bike_bucket(&self, bike_id: &Identifier) -> Option<&StatBucket> {
        self.bikes.get(bike_id)
    }

    pub fn station_bucket(&self, station_id: &Identifier) -> Option<&StatBucket> {
        self.stations.get(station_id)
    }

    pub fn bikes(&self) -> &HashMap<Identifier, StatBucket> {
        &self.bikes
    }

    pub fn stations(&self) -> &HashMap<Identifier, StatBucket> {
        &self.stations
    }

    /// Number of trips attributed to station buckets
    pub fn station_trip_count(&self) -> usize {
        self.stations.values().map(|bucket| bucket.trip_count).sum()
    }
}
