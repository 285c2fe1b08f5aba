//! Swimming workout.
//!
//! Distance is counted from strokes, but mean speed is taken from the pool
//! lengths swum. The two figures are independent and usually disagree.

use super::types::{
    check_arity, float_arg, integer_arg, SessionData, Training, WorkoutError, WorkoutKind, M_IN_KM,
};

/// Distance covered by one stroke in meters.
const STROKE_LENGTH_M: f64 = 1.38;
/// Offset added to mean speed in the swimming calorie formula.
const SWM_COEFF_CAL_1: f64 = 1.1;
/// Multiplier in the swimming calorie formula.
const SWM_COEFF_CAL_2: f64 = 2.0;

/// A pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: SessionData,
    /// Pool length in meters
    length_pool_m: f64,
    /// Number of pool lengths swum
    count_pool: u32,
}

impl Swimming {
    /// Create a swimming session.
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
            length_pool_m,
            count_pool,
        }
    }

    /// Build from raw package values
    /// `[action, duration, weight, pool length, pool count]`.
    pub fn from_raw(data: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::Swimming, data)?;
        Ok(Self {
            session: SessionData::from_raw(data)?,
            length_pool_m: float_arg("length_pool", data[3])?,
            count_pool: integer_arg("count_pool", data[4])?,
        })
    }

    /// Pool length in meters.
    pub fn length_pool_m(&self) -> f64 {
        self.length_pool_m
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.session.duration_hours
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWM_COEFF_CAL_1) * SWM_COEFF_CAL_2 * self.session.weight_kg
    }
}
