//! Fitness Tracker - Workout Metrics Calculator
//!
//! Turns raw sensor packages from running, sports walking and swimming
//! sessions into distance, mean speed and calorie figures, and renders a
//! one-line summary per session.

pub mod metrics;
pub mod sensors;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::report::{write_report, ReportOptions, ReportOutcome};
pub use metrics::summary::TrainingSummary;
pub use sensors::package::{read_package, SensorPackage};
pub use storage::config::AppConfig;
pub use workouts::types::{Training, Workout, WorkoutError, WorkoutKind};
