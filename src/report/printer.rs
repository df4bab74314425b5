//! Profiling report rendering
//!
//! Renders the collected measurements as a fixed-width table on stderr.
//! The table layout is part of the output contract and is never colored.

use std::fmt;
use std::io;

use super::format::{crop_path, group_thousands};
use super::layout::{centered, row, rule};
use crate::measurement::MultiMeasurement;

/// Title shown in the banner
pub const TITLE: &str = " PROFILING WITH SPEEDO ";

/// Fill for the banner and the rule closing the report
pub const BANNER_FILL: char = '#';

/// Fill for the rule between header and body
pub const HEADER_FILL: char = '=';

/// Fill for the rule between two measurements
pub const SEPARATOR_FILL: char = '-';

/// Collects measurements and prints their statistics.
///
/// Measurements are printed in the order they were added, two rows each:
/// the first row shows where the measurement started, the second where it
/// ended together with its count and durations.
///
/// # Examples
///
/// ```
/// use speedo::{Checkpoint, MultiMeasurement, Reporter};
///
/// let mut reporter = Reporter::new();
/// reporter.add(MultiMeasurement::new(
///     Checkpoint::new("src/parser.cc", 10),
///     Checkpoint::new("src/parser.cc", 42),
///     3,
///     1_500,
///     4_500,
/// ));
///
/// let text = reporter.render();
/// assert!(text.contains("parser.cc"));
/// assert!(text.contains("4,500"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    measurements: Vec<MultiMeasurement>,
}

impl Reporter {
    /// Create an empty reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            measurements: Vec::new(),
        }
    }

    /// Add a measurement to the end of the report
    pub fn add(&mut self, measurement: MultiMeasurement) {
        self.measurements.push(measurement);
    }

    /// Print the report to stderr.
    ///
    /// A failing stderr is ignored; there is nowhere left to report it.
    pub fn print(&self) {
        let stderr = io::stderr();
        let _ = self.write_to(&mut stderr.lock());
    }

    /// Write the report to `out`
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }

    /// Render the report into a string
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Measurements in report order
    #[must_use]
    pub fn measurements(&self) -> &[MultiMeasurement] {
        &self.measurements
    }

    /// Number of measurements added so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether no measurement has been added
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

impl fmt::Display for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f)?;
        write_header(f)?;

        let last = self.measurements.len().saturating_sub(1);
        for (i, measurement) in self.measurements.iter().enumerate() {
            write_measurement(f, measurement)?;
            let fill = if i < last {
                SEPARATOR_FILL
            } else {
                BANNER_FILL
            };
            writeln!(f, "{}", rule(fill))?;
        }

        Ok(())
    }
}

fn write_title(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", rule(BANNER_FILL))?;
    writeln!(f, "{}", centered(TITLE, BANNER_FILL))?;
    writeln!(f, "{}", rule(BANNER_FILL))
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "{}",
        row("File", "Line ", "Count ", "Average [µs] ", "Overall [µs]")
    )?;
    writeln!(f, "{}", rule(HEADER_FILL))
}

fn write_measurement(f: &mut fmt::Formatter<'_>, measurement: &MultiMeasurement) -> fmt::Result {
    let file_start = crop_path(&measurement.start.file);
    writeln!(
        f,
        "{}",
        row(file_start, &measurement.start.line.to_string(), "", "", "")
    )?;

    // Same file at both ends is only named once
    let file_end = crop_path(&measurement.end.file);
    let file_end = if file_end == file_start { "" } else { file_end };

    writeln!(
        f,
        "{}",
        row(
            file_end,
            &measurement.end.line.to_string(),
            &measurement.count.to_string(),
            &group_thousands(measurement.average_micros),
            &group_thousands(measurement.overall_micros),
        )
    )
}
