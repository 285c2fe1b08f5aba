//! Batch report over a list of sensor packages.
//!
//! Packages are processed strictly in input order; each successful package
//! produces exactly one output line.

use crate::sensors::package::{read_package, SensorPackage};
use crate::workouts::types::WorkoutError;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Rendering of each report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Options controlling a report run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Line format
    pub format: OutputFormat,
    /// Skip failing packages instead of aborting the run
    pub keep_going: bool,
}

/// Result of a completed report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Lines written
    pub written: usize,
    /// Packages skipped because of an error (only with `keep_going`)
    pub failed: usize,
}

/// Dispatch every package and write one line per workout to `out`.
///
/// Without `keep_going` the first error aborts the run; lines already
/// written stay written.
pub fn write_report<W: Write>(
    packages: &[SensorPackage],
    out: &mut W,
    options: &ReportOptions,
) -> Result<ReportOutcome, WorkoutError> {
    let mut outcome = ReportOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match render_package(package, options.format) {
            Ok(line) => {
                writeln!(out, "{line}").map_err(|e| WorkoutError::Output(e.to_string()))?;
                outcome.written += 1;
            }
            Err(e) if options.keep_going => {
                tracing::warn!(index, workout_type = %package.workout_type, "Skipping package: {e}");
                outcome.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(outcome)
}

/// Dispatch one package and render its summary line.
pub fn render_package(
    package: &SensorPackage,
    format: OutputFormat,
) -> Result<String, WorkoutError> {
    let workout = read_package(&package.workout_type, &package.data)?;
    let summary = workout.summary();

    match format {
        OutputFormat::Text => Ok(summary.message()),
        OutputFormat::Json => summary
            .to_json()
            .map_err(|e| WorkoutError::Output(e.to_string())),
    }
}
