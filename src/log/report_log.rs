//! Timestamped report log files
//!
//! Each saved report lands in `<home>/.speedo/log/YYYYMMDD-HHMMSS.log`.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::Reporter;

/// Folder below the home directory that holds the log files
const LOG_SUBDIR: &str = ".speedo/log";

/// Format of the log file name, without extension
const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Where report logs are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Home directory the log folder is placed in
    pub home: PathBuf,
}

impl LogConfig {
    /// Use an explicit home directory
    #[must_use]
    pub fn new<P: Into<PathBuf>>(home: P) -> Self {
        Self { home: home.into() }
    }

    /// Use the home directory named by the `HOME` environment variable
    ///
    /// # Errors
    /// Returns an error if `HOME` is unset or empty
    pub fn from_env() -> Result<Self> {
        Self::from_home_var(std::env::var_os("HOME"))
    }

    fn from_home_var(home: Option<std::ffi::OsString>) -> Result<Self> {
        match home {
            Some(home) if !home.is_empty() => Ok(Self::new(home)),
            Some(_) => bail!("HOME is set but empty; cannot locate the log folder"),
            None => bail!("HOME is not set; cannot locate the log folder"),
        }
    }

    /// The folder log files are written to: `<home>/.speedo/log`
    #[must_use]
    pub fn log_dir(&self) -> PathBuf {
        self.home.join(LOG_SUBDIR)
    }
}

/// Name of the log file for a report saved at `timestamp`
#[must_use]
pub fn log_file_name<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}.log", timestamp.format(FILE_STAMP_FORMAT))
}

/// Writes rendered reports into the log folder
pub struct ReportLog {
    log_dir: PathBuf,
}

impl ReportLog {
    /// Create a report log, creating the log folder if it doesn't exist
    ///
    /// # Errors
    /// Returns an error if the log folder cannot be created
    pub fn new(config: &LogConfig) -> Result<Self> {
        let log_dir = config.log_dir();

        fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self { log_dir })
    }

    /// Save the report in a file named after the current local time
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save(&self, reporter: &Reporter) -> Result<PathBuf> {
        self.save_at(reporter, &Local::now())
    }

    /// Save the report in a file named after `timestamp`.
    ///
    /// A file saved earlier in the same second is overwritten.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub fn save_at<Tz: TimeZone>(
        &self,
        reporter: &Reporter,
        timestamp: &DateTime<Tz>,
    ) -> Result<PathBuf>
    where
        Tz::Offset: std::fmt::Display,
    {
        let path = self.log_dir.join(log_file_name(timestamp));

        fs::write(&path, reporter.render())
            .with_context(|| format!("Failed to write log file: {}", path.display()))?;

        Ok(path)
    }

    /// Get the folder log files are written to
    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_measurement;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_log_dir_below_home() {
        let config = LogConfig::new("/home/dev");
        assert_eq!(config.log_dir(), PathBuf::from("/home/dev/.speedo/log"));
    }

    #[test]
    fn test_from_home_var_missing_is_error() {
        let err = LogConfig::from_home_var(None).unwrap_err();
        assert!(err.to_string().contains("HOME is not set"));
    }

    #[test]
    fn test_from_home_var_empty_is_error() {
        let err = LogConfig::from_home_var(Some("".into())).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_from_home_var_present() {
        let config = LogConfig::from_home_var(Some("/home/dev".into())).unwrap();
        assert_eq!(config.home, PathBuf::from("/home/dev"));
    }

    #[test]
    fn test_log_file_name_format() {
        assert_eq!(log_file_name(&fixed_time()), "20240307-090501.log");
    }

    #[test]
    fn test_new_creates_log_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = LogConfig::new(temp_dir.path());

        let log = ReportLog::new(&config).unwrap();

        assert!(log.log_dir().is_dir());
        assert_eq!(log.log_dir(), temp_dir.path().join(".speedo").join("log"));
    }

    #[test]
    fn test_save_at_writes_rendered_report() {
        let temp_dir = TempDir::new().unwrap();
        let log = ReportLog::new(&LogConfig::new(temp_dir.path())).unwrap();

        let mut reporter = Reporter::new();
        reporter.add(make_test_measurement("a.cc", 1, "b.cc", 2));

        let path = log.save_at(&reporter, &fixed_time()).unwrap();

        assert_eq!(path.file_name().unwrap(), "20240307-090501.log");
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, reporter.render());
    }

    #[test]
    fn test_save_uses_log_extension() {
        let temp_dir = TempDir::new().unwrap();
        let log = ReportLog::new(&LogConfig::new(temp_dir.path())).unwrap();

        let path = log.save(&Reporter::new()).unwrap();

        assert!(path.starts_with(log.log_dir()));
        assert_eq!(path.extension().unwrap(), "log");
    }
}
