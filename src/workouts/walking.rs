//! Sports walking workout.

use super::types::{
    check_arity, float_arg, SessionData, Training, WorkoutError, WorkoutKind, MINUTES_IN_HOUR,
};

/// Weight multiplier in the walking calorie formula.
const WLK_COEFF_CAL_1: f64 = 0.035;
/// Exponent applied to mean speed.
const WLK_COEFF_CAL_2: i32 = 2;
/// Multiplier applied to the speed/height ratio.
const WLK_COEFF_CAL_3: f64 = 0.029;

/// A sports walking session.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: SessionData,
    /// Athlete height in centimeters
    height_cm: f64,
}

impl SportsWalking {
    /// Create a sports walking session.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: SessionData::new(action, duration_hours, weight_kg),
            height_cm,
        }
    }

    /// Build from raw package values `[action, duration, weight, height]`.
    pub fn from_raw(data: &[f64]) -> Result<Self, WorkoutError> {
        check_arity(WorkoutKind::SportsWalking, data)?;
        Ok(Self {
            session: SessionData::from_raw(data)?,
            height_cm: float_arg("height", data[3])?,
        })
    }

    /// Athlete height in centimeters.
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &SessionData {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg;
        // The speed term is truncated by floor division before scaling.
        let speed_ratio = floor_div(self.mean_speed_kmh().powi(WLK_COEFF_CAL_2), self.height_cm);
        (WLK_COEFF_CAL_1 * weight + speed_ratio * WLK_COEFF_CAL_3 * weight)
            * self.session.duration_hours
            * MINUTES_IN_HOUR
    }
}

/// Floor division of two floats.
///
/// The quotient is taken from the remainder-corrected numerator, so exact
/// multiples floor to the multiple instead of one below it.
pub(crate) fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }
    let mut floored = div.floor();
    if div - floored > 0.5 {
        floored += 1.0;
    }
    floored
}
