//! Error handling for bike activity processing.
//!
//! Every error is fatal: validation failures carry the 1-based source line,
//! pairing failures carry the lines of both events in the window.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("usage error: {message}")]
    Usage { message: String },

    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid csv data on line {line}: {kind}")]
    InvalidRecord {
        line: usize,
        kind: ValidationErrorKind,
    },

    #[error(
        "Missing {side} timestamp while pairing bike {bike_id} (lines {earlier_line} and {later_line})"
    )]
    MissingTimestampForPairing {
        side: TimestampSide,
        bike_id: u32,
        earlier_line: usize,
        later_line: usize,
    },

    #[error("Division by zero while averaging {dimension} {id}")]
    DivisionByZero { dimension: String, id: u32 },

    #[error("Report serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn invalid_record(line: usize, kind: ValidationErrorKind) -> Self {
        Self::InvalidRecord { line, kind }
    }

    /// Source line for errors raised against a single row
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidRecord { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Validation kind for rejected rows
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self {
            Self::InvalidRecord { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Reasons a raw row is rejected, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    #[error("expected 4 columns, found {found}")]
    MalformedRow { found: usize },

    #[error("check station ID")]
    InvalidStationId,

    #[error("check bike ID")]
    InvalidBikeId,

    #[error("check arrival time")]
    InvalidArrivalTimestamp,

    #[error("check departure time")]
    InvalidDepartureTimestamp,

    #[error("check empty timestamps")]
    EmptyTimestampPair,
}

/// Which half of a pairing window lacked its timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSide {
    Departure,
    Arrival,
}

impl fmt::Display for TimestampSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSide::Departure => write!(f, "departure"),
            TimestampSide::Arrival => write!(f, "arrival"),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
