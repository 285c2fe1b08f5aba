//! Metrics module for training summaries and batch reports.

pub mod report;
pub mod summary;

pub use report::{render_package, write_report, OutputFormat, ReportOptions, ReportOutcome};
pub use summary::TrainingSummary;
