//! Application constants for the bikeshare statistics processor
//!
//! Input layout, identifier limits and timestamp patterns shared by the
//! validator, the pairer and the report formatter.

// =============================================================================
// Input Layout
// =============================================================================

/// Number of comma-separated fields in every input row
pub const EXPECTED_COLUMNS: usize = 4;

/// Field positions within a row
pub mod columns {
    pub const STATION_ID: usize = 0;
    pub const BIKE_ID: usize = 1;
    pub const ARRIVAL: usize = 2;
    pub const DEPARTURE: usize = 3;
}

// =============================================================================
// Identifier Limits
// =============================================================================

/// Lowest accepted station and bike identifier
pub const MIN_IDENTIFIER: u32 = 1;

/// Highest accepted station identifier
pub const MAX_STATION_ID: u32 = 1000;

/// Highest accepted bike identifier
pub const MAX_BIKE_ID: u32 = 10000;

/// Station ids are 1-4 ASCII digits
pub const STATION_ID_PATTERN: &str = r"^[0-9]{1,4}$";

/// Bike ids are 1-5 ASCII digits
pub const BIKE_ID_PATTERN: &str = r"^[0-9]{1,5}$";

// =============================================================================
// Timestamps
// =============================================================================

/// Naive second-precision timestamps in the 2000s, e.g. `20200101T10:00:00`
pub const TIMESTAMP_PATTERN: &str = r"^20[0-9]{6}T[0-9]{2}:[0-9]{2}:[0-9]{2}$";

/// chrono format matching [`TIMESTAMP_PATTERN`]
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H:%M:%S";

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
