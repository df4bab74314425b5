//! Speedo - Checkpoint timing reports
//!
//! Renders elapsed-time statistics measured between pairs of source
//! checkpoints as a fixed-width table. Measurements are collected elsewhere;
//! speedo only formats them and, on request, keeps a copy in a log folder.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod log;
pub mod measurement;
pub mod report;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use config::SpeedoConfig;
pub use log::{LogConfig, ReportLog};
pub use measurement::{Checkpoint, MeasurementFile, MultiMeasurement};
pub use report::{crop_path, group_thousands, Reporter};
