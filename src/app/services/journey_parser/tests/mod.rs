//! Test utilities for journey parser testing

use std::io::Write;
use tempfile::NamedTempFile;

mod validator_tests;

/// Two events for bike 1 at station 1 forming a 30 minute trip
pub fn create_single_trip_csv() -> String {
    "1,1,,20200101T10:00:00\n1,1,20200101T10:30:00,\n".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
