//! Report persistence
//!
//! Saves printed reports under `<home>/.speedo/log`, one timestamped file
//! per report. Never used by [`Reporter::print`](crate::Reporter::print)
//! itself; callers opt in.

pub mod report_log;

pub use report_log::{log_file_name, LogConfig, ReportLog};
