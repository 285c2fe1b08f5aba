//! Sensor module: raw packages from workout trackers.

pub mod package;

pub use package::{read_package, sample_packages, SensorPackage};
