//! Average-duration report built from aggregated buckets

use super::aggregator::TripAggregator;
use crate::app::models::{Identifier, StatBucket};
use crate::app::services::trip_pairer::compare_identifiers;
use crate::config::{OutputFormat, SortOrder};
use crate::constants::{MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::error::{Result, StatsError};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Write;

/// Which identifier a bucket is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Bike,
    Station,
}

impl Dimension {
    /// Label used in report headers
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Bike => "Bike ID",
            Dimension::Station => "Station ID",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Bike => write!(f, "bike"),
            Dimension::Station => write!(f, "station"),
        }
    }
}

/// Report entry for a single bike or station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub id: Identifier,
    pub total_seconds: i64,
    pub trip_count: usize,
    pub implausible_trips: usize,
    pub average_seconds: f64,
    /// `HH:MM:SS`
    pub average: String,
}

impl BucketSummary {
    fn from_bucket(dimension: Dimension, id: &Identifier, bucket: &StatBucket) -> Result<Self> {
        let average_seconds =
            bucket
                .average_seconds()
                .ok_or_else(|| StatsError::DivisionByZero {
                    dimension: dimension.to_string(),
                    id: id.value(),
                })?;

        Ok(Self {
            id: id.clone(),
            total_seconds: bucket.total_seconds,
            trip_count: bucket.trip_count,
            implausible_trips: bucket.implausible_trips,
            average_seconds,
            average: format_average(average_seconds),
        })
    }
}

/// Per-bike then per-station summaries, each in ascending identifier order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActivityReport {
    pub bikes: Vec<BucketSummary>,
    pub stations: Vec<BucketSummary>,
}

impl ActivityReport {
    pub fn from_aggregator(aggregator: &TripAggregator, order: SortOrder) -> Result<Self> {
        Ok(Self {
            bikes: summarise(Dimension::Bike, aggregator.bikes(), order)?,
            stations: summarise(Dimension::Station, aggregator.stations(), order)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.bikes.is_empty() && self.stations.is_empty()
    }

    /// Write the report in the requested format
    pub fn write_to<W: Write>(&self, format: OutputFormat, writer: &mut W) -> Result<()> {
        match format {
            OutputFormat::Human => self.write_human(writer),
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, self)?;
                writeln!(writer)?;
                Ok(())
            }
        }
    }

    /// Header, totals and average lines for every bike, then every station
    pub fn write_human<W: Write>(&self, writer: &mut W) -> Result<()> {
        let sections = [(Dimension::Bike, &self.bikes), (Dimension::Station, &self.stations)];

        for (dimension, summaries) in sections {
            for summary in summaries {
                writeln!(writer, "##### {}:{} ######", dimension.label(), summary.id)?;
                writeln!(
                    writer,
                    "  Total usage: {} seconds in {} trips",
                    summary.total_seconds, summary.trip_count
                )?;
                writeln!(writer, "  Average trip: {}", summary.average)?;
            }
        }

        Ok(())
    }

    /// Render the human report into a string
    pub fn to_human_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_human(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn summarise(
    dimension: Dimension,
    buckets: &HashMap<Identifier, StatBucket>,
    order: SortOrder,
) -> Result<Vec<BucketSummary>> {
    let mut entries: Vec<(&Identifier, &StatBucket)> = buckets.iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_identifiers(a, b, order));

    entries
        .into_iter()
        .map(|(id, bucket)| BucketSummary::from_bucket(dimension, id, bucket))
        .collect()
}

/// Format a duration in seconds as `HH:MM:SS`
///
/// Hours and minutes are floor quotients; displayed minutes and seconds are
/// taken modulo 60 with any fractional second dropped.
pub fn format_average(seconds: f64) -> String {
    let minutes = (seconds / SECONDS_PER_MINUTE).floor();
    let hours = (minutes / MINUTES_PER_HOUR).floor();

    format!(
        "{:02}:{:02}:{:02}",
        hours as i64,
        minutes.rem_euclid(MINUTES_PER_HOUR) as i64,
        seconds.rem_euclid(SECONDS_PER_MINUTE) as i64
    )
}
