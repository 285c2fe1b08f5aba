//! Running workout.

use super::types::{
    check_arity, SessionData, Training, WorkoutError, WorkoutKind, MINUTES_IN_HOUR, M_IN_KM,
};

/// Speed multiplier in the running calorie formula.
const RUN_COEFF_CAL_1: f64 = 18.0;
/// Offset subtracted in the running calorie formula.
const RUN_COEFF_CAL_2: f64 = 20.0;

/// A running session.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: SessionData,
}

impl Running {
    /// Create a running session.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
        }
    }

    /// Build from raw package values `[action, duration, weight]`.
    pub fn from_raw(data: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::Running, data)?;
        Ok(Self {
            session: SessionData::from_raw(data)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (RUN_COEFF_CAL_1 * self.mean_speed_kmh() - RUN_COEFF_CAL_2) * self.session.weight_kg
            / M_IN_KM
            * self.session.duration_hours
            * MINUTES_IN_HOUR
    }
}
