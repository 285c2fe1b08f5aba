//! Workout types, the shared training behaviour and workout errors.

use crate::metrics::summary::TrainingSummary;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Length of one step in meters (running and walking).
pub const STEP_LENGTH_M: f64 = 0.65;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MINUTES_IN_HOUR: f64 = 60.0;

/// Kind of workout a sensor package describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    /// Pool swimming, tag `SWM`
    Swimming,
    /// Running, tag `RUN`
    Running,
    /// Sports walking, tag `WLK`
    SportsWalking,
}

impl WorkoutKind {
    /// All supported kinds, in tag-table order.
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Sensor tag identifying this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown in the summary line.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of raw values a package of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| WorkoutError::UnsupportedKind(tag.to_string()))
    }
}

/// Fields every workout session carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionData {
    /// Steps taken, or strokes for swimming
    pub action: u32,
    /// Session duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl SessionData {
    /// Create session data from typed values.
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_hours,
            weight_kg,
        }
    }

    /// Build session data from the first three raw values of a package.
    ///
    /// The caller has already checked the arity of `data`.
    pub(crate) fn from_raw(data: &[f64]) -> Result<Self, WorkoutError> {
        Ok(Self {
            action: integer_arg("action", data[0])?,
            duration_hours: float_arg("duration", data[1])?,
            weight_kg: float_arg("weight", data[2])?,
        })
    }
}

/// Shared behaviour of every workout kind.
///
/// Distance and mean speed have step-based defaults; each kind supplies
/// its own calorie formula and may override the rest.
pub trait Training {
    /// Kind of this workout.
    fn kind(&self) -> WorkoutKind;

    /// Common session fields.
    fn session(&self) -> &SessionData;

    /// Distance covered by one unit of `action`, in meters.
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in kilometers.
    fn distance_km(&self) -> f64 {
        self.session().action as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    /// Calories spent, in kcal.
    fn spent_calories(&self) -> f64;

    /// Compute the summary for this session.
    fn summary(&self) -> TrainingSummary {
        let summary = TrainingSummary {
            training_type: self.kind().display_name().to_string(),
            duration: self.session().duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        };
        tracing::debug!(?summary, "Computed training summary");
        summary
    }
}

/// A typed workout record built from one sensor package.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(super::Running),
    SportsWalking(super::SportsWalking),
    Swimming(super::Swimming),
}

impl Workout {
    /// Build a workout of the given kind from raw package values.
    pub fn from_raw(kind: WorkoutKind, data: &[f64]) -> Result<Self, WorkoutError> {
        match kind {
            WorkoutKind::Running => super::Running::from_raw(data).map(Workout::Running),
            WorkoutKind::SportsWalking => {
                super::SportsWalking::from_raw(data).map(Workout::SportsWalking)
            }
            WorkoutKind::Swimming => super::Swimming::from_raw(data).map(Workout::Swimming),
        }
    }

    /// Borrow the record through the shared training interface.
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }

    /// Kind of the wrapped record.
    pub fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    /// Compute the summary for the wrapped record.
    pub fn summary(&self) -> TrainingSummary {
        self.as_training().summary()
    }
}

impl From<super::Running> for Workout {
    fn from(w: super::Running) -> Self {
        Workout::Running(w)
    }
}

impl From<super::SportsWalking> for Workout {
    fn from(w: super::SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<super::Swimming> for Workout {
    fn from(w: super::Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Errors related to workout packages.
#[derive(Debug, Error, PartialEq)]
pub enum WorkoutError {
    /// Tag is not one of SWM, RUN, WLK
    #[error("Unsupported workout type: {0}")]
    UnsupportedKind(String),

    /// Wrong number of raw values for the kind
    #[error("{kind} expects {expected} values, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// Raw value cannot be converted to the field's type
    #[error("Invalid value for {field}: {value}")]
    TypeMismatch { field: &'static str, value: f64 },

    /// Writing a report line failed
    #[error("Output error: {0}")]
    Output(String),
}

/// Check that `data` carries exactly the number of values `kind` needs.
pub(crate) fn check_arity(kind: WorkoutKind, data: &[f64]) -> Result<(), WorkoutError> {
    if data.len() != kind.arity() {
        return Err(WorkoutError::ArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }
    Ok(())
}

/// Convert a raw value to a non-negative integer count.
pub(crate) fn integer_arg(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(WorkoutError::TypeMismatch { field, value });
    }
    Ok(value as u32)
}

/// Accept a raw value as a float field; only non-finite values are rejected.
pub(crate) fn float_arg(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::TypeMismatch { field, value });
    }
    Ok(value)
}
