//! Raw sensor packages and dispatch to typed workouts.

use crate::workouts::types::{Workout, WorkoutError, WorkoutKind};
use serde::{Deserialize, Serialize};

/// A raw package as received from a tracker: kind tag plus positional values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Kind tag (`SWM`, `RUN` or `WLK`)
    pub workout_type: String,
    /// Positional values, in the kind's constructor order
    pub data: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from a tag and raw values.
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Read a sensor package into a typed workout.
///
/// Fails with [`WorkoutError::UnsupportedKind`] for an unknown tag, and with
/// an arity or type error when `data` does not fit the kind.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = workout_type.parse()?;
    tracing::debug!(%kind, values = data.len(), "Dispatching sensor package");
    Workout::from_raw(kind, data)
}

/// The demonstration dataset: one swim, one run, one walk.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
