//! Measurement records
//!
//! Checkpoints and the aggregated statistics measured between two of them.
//! Records are produced by an external aggregator; this crate only reads them.

pub mod jsonl;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use jsonl::MeasurementFile;

/// A source location where timing starts or ends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    /// Path of the source file, as recorded by the instrumentation
    pub file: String,
    /// Line number within the file (1-indexed)
    pub line: u32,
}

impl Checkpoint {
    /// Create a checkpoint at the given file and line
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Aggregated timing statistics between a start and an end checkpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiMeasurement {
    /// Where the measurement began
    pub start: Checkpoint,
    /// Where the measurement ended
    pub end: Checkpoint,
    /// Number of times the span between the checkpoints was measured
    pub count: u64,
    /// Average duration of one occurrence in microseconds
    pub average_micros: i64,
    /// Accumulated duration of all occurrences in microseconds
    pub overall_micros: i64,
}

impl MultiMeasurement {
    /// Create a record from durations already expressed in microseconds
    #[must_use]
    pub const fn new(
        start: Checkpoint,
        end: Checkpoint,
        count: u64,
        average_micros: i64,
        overall_micros: i64,
    ) -> Self {
        Self {
            start,
            end,
            count,
            average_micros,
            overall_micros,
        }
    }

    /// Create a record from [`Duration`] values.
    ///
    /// Durations too long to fit in `i64` microseconds saturate at `i64::MAX`.
    #[must_use]
    pub fn from_durations(
        start: Checkpoint,
        end: Checkpoint,
        count: u64,
        average: Duration,
        overall: Duration,
    ) -> Self {
        Self::new(
            start,
            end,
            count,
            saturating_micros(average),
            saturating_micros(overall),
        )
    }
}

fn saturating_micros(duration: Duration) -> i64 {
    i64::try_from(duration.as_micros()).unwrap_or(i64::MAX)
}
