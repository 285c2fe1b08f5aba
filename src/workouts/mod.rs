//! Workout module: session records and per-kind formula sets.

pub mod running;
pub mod swimming;
pub mod types;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use types::{SessionData, Training, Workout, WorkoutError, WorkoutKind};
pub use walking::SportsWalking;
