//! Speedo - Checkpoint timing reports
//!
//! CLI entry point: reads measurement records and prints the profiling report.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use speedo::config::{SpeedoConfig, DEFAULT_CONFIG_FILE};
use speedo::{MeasurementFile, MultiMeasurement, ReportLog, Reporter};

/// Checkpoint timing report renderer
///
/// Prints the statistics of measurements taken between source checkpoints
/// as a fixed-width table on stderr.
#[derive(Parser, Debug)]
#[command(name = "speedo", version, about)]
struct Cli {
    /// JSON Lines file with one measurement record per line
    input: PathBuf,

    /// Path to the speedo.toml configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also save the report to <home>/.speedo/log
    #[arg(long)]
    save_log: bool,

    /// Home directory for the log folder (overrides config and $HOME)
    #[arg(long)]
    home: Option<PathBuf>,
}

/// Load the config: an explicit path must exist, the default one may not.
fn load_config(path: Option<&Path>) -> Result<SpeedoConfig> {
    match path {
        Some(path) => SpeedoConfig::from_path(path)
            .with_context(|| format!("Failed to load config from '{}'", path.display())),
        None => SpeedoConfig::from_path_or_default(DEFAULT_CONFIG_FILE),
    }
}

/// Build a reporter holding `measurements` in their original order.
fn build_reporter(measurements: Vec<MultiMeasurement>) -> Reporter {
    let mut reporter = Reporter::new();
    for measurement in measurements {
        reporter.add(measurement);
    }
    reporter
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let input = MeasurementFile::new(&cli.input);
    let measurements = input
        .read_all()
        .with_context(|| format!("Failed to load measurements from '{}'", cli.input.display()))?;

    if measurements.is_empty() {
        eprintln!(
            "{} no measurements in {}",
            "warning:".yellow().bold(),
            cli.input.display()
        );
    }

    let reporter = build_reporter(measurements);
    reporter.print();

    if cli.save_log || config.log.save {
        let log_config = config.log_config(cli.home.as_deref())?;
        let log = ReportLog::new(&log_config).context("Failed to initialize report log")?;
        let path = log.save(&reporter).context("Failed to save report log")?;
        eprintln!("{} {}", "Saved log:".dimmed(), path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use speedo::Checkpoint;
    use tempfile::TempDir;

    fn measurement(file: &str, line: u32) -> MultiMeasurement {
        MultiMeasurement::new(
            Checkpoint::new(file, line),
            Checkpoint::new(file, line + 1),
            1,
            10,
            10,
        )
    }

    #[test]
    fn test_build_reporter_keeps_order() {
        let reporter = build_reporter(vec![measurement("b.cc", 1), measurement("a.cc", 2)]);

        assert_eq!(reporter.len(), 2);
        assert_eq!(reporter.measurements()[0].start.file, "b.cc");
        assert_eq!(reporter.measurements()[1].start.file, "a.cc");
    }

    #[test]
    fn test_build_reporter_empty() {
        assert!(build_reporter(vec![]).is_empty());
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = load_config(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_load_config_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("speedo.toml");
        std::fs::write(&path, "[log]\nsave = true\n").unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert!(config.log.save);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "speedo",
            "m.jsonl",
            "--save-log",
            "--home",
            "/tmp/home",
            "--config",
            "c.toml",
        ]);

        assert_eq!(cli.input, PathBuf::from("m.jsonl"));
        assert!(cli.save_log);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/home")));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }
}
