//! Configuration management for a processing run.
//!
//! Provides the ordering used to pair events into trips and the
//! format the final report is emitted in.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Ordering applied to events before pairing and to report entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Numeric station id, numeric bike id, then chronological timestamps
    #[default]
    Numeric,
    /// Lexicographic comparison of the raw field text (legacy behaviour)
    Textual,
}

/// Output format for the activity report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable line-oriented report
    #[default]
    Human,
    /// Pretty-printed JSON for scripting
    Json,
}

/// Settings for a single pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Ordering used by the trip pairer and the report
    pub sort_order: SortOrder,

    /// Report output format
    pub output_format: OutputFormat,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }
}
