//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::measurement::{Checkpoint, MultiMeasurement};

/// Create a `MultiMeasurement` between two checkpoints for testing.
///
/// Sets `count = 10`, `average_micros = 1234` and `overall_micros = 12340`.
#[must_use]
pub fn make_test_measurement(
    start_file: &str,
    start_line: u32,
    end_file: &str,
    end_line: u32,
) -> MultiMeasurement {
    MultiMeasurement::new(
        Checkpoint::new(start_file, start_line),
        Checkpoint::new(end_file, end_line),
        10,
        1234,
        12340,
    )
}
