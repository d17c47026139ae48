//! Event collection from CSV sources
//!
//! Reads header-less, four-column CSV input and gathers every validated
//! event in source order.

use super::validator::validate_record;
use crate::app::models::JourneyEvent;
use crate::error::{Result, StatsError};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info};

/// In-memory, source-ordered sequence of validated events
#[derive(Debug, Clone, Default)]
pub struct EventCollector {
    events: Vec<JourneyEvent>,
    rows_read: usize,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a row and append it
    pub fn push_row<S: AsRef<str>>(&mut self, fields: &[S], line: usize) -> Result<()> {
        self.rows_read += 1;
        let event = validate_record(fields, line)?;
        self.events.push(event);
        Ok(())
    }

    /// Collect every row of a CSV stream, stopping at the first invalid row
    ///
    /// Every physical line is one row. A blank line is a row with no columns
    /// and is rejected like any other malformed row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut buffered = BufReader::new(reader);
        let mut raw = Vec::new();
        let mut line = 0;

        let mut collector = Self::new();

        loop {
            raw.clear();
            if buffered.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            line += 1;

            let record = split_row(strip_line_ending(&raw))?;
            let fields: Vec<&str> = record.iter().collect();
            collector.push_row(&fields, line)?;
        }

        debug!(
            "Collected {} events from {} rows",
            collector.events.len(),
            collector.rows_read
        );

        Ok(collector)
    }

    /// Collect events from a CSV file on disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StatsError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => StatsError::Io(e),
        })?;

        info!("Reading journey events from {}", path.display());
        Self::from_reader(file)
    }

    pub fn events(&self) -> &[JourneyEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of rows handed to the validator
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn into_events(self) -> Vec<JourneyEvent> {
        self.events
    }
}

/// Split one line into its CSV fields; an empty line has none
fn split_row(bytes: &[u8]) -> Result<StringRecord> {
    if bytes.is_empty() {
        return Ok(StringRecord::new());
    }

    // flexible: rows with the wrong column count reach the validator
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    Ok(csv_reader.records().next().transpose()?.unwrap_or_default())
}

fn strip_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
