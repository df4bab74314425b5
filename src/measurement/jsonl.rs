//! JSONL (JSON Lines) measurement input
//!
//! Reads records written by an external aggregator, one `MultiMeasurement`
//! JSON object per line.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use super::MultiMeasurement;

/// A JSON Lines file of measurement records
pub struct MeasurementFile {
    path: PathBuf,
}

impl MeasurementFile {
    /// Refer to the measurement file at `path`; nothing is opened yet
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Append a record as a single JSON line, creating the file if needed
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be opened or created
    /// - Writing to the file fails
    pub fn append(&self, record: &MultiMeasurement) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open measurement file: {}", self.path.display()))?;

        let json = serde_json::to_string(record).context("Failed to serialize measurement")?;

        writeln!(file, "{json}").context("Failed to write to measurement file")?;

        Ok(())
    }

    /// Read all records, in file order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - Any non-blank line is not a valid measurement record
    pub fn read_all(&self) -> Result<Vec<MultiMeasurement>> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read measurement file: {}", self.path.display())
        })?;

        parse_lines(&content)
    }

    /// Get the path of the measurement file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse JSON Lines content into records, skipping blank lines
pub fn parse_lines(content: &str) -> Result<Vec<MultiMeasurement>> {
    let mut records = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: MultiMeasurement = serde_json::from_str(line)
            .with_context(|| format!("Failed to parse line {} as a measurement", line_num + 1))?;

        records.push(record);
    }

    Ok(records)
}
