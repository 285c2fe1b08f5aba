//! Unit tests for sensor package dispatch.

use fitness_tracker::workouts::{Running, SportsWalking, Swimming};
use fitness_tracker::{read_package, Workout, WorkoutError, WorkoutKind};

#[test]
fn test_dispatch_builds_matching_records() {
    assert_eq!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap(),
        Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
    );
    assert_eq!(
        read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap(),
        Workout::Running(Running::new(15000, 1.0, 75.0))
    );
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap(),
        Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
    );
}

#[test]
fn test_dispatch_unsupported_kind() {
    for tag in ["XYZ", "", "swm", "Run", "WALK"] {
        assert_eq!(
            read_package(tag, &[1.0, 1.0, 1.0]),
            Err(WorkoutError::UnsupportedKind(tag.to_string()))
        );
    }
}

#[test]
fn test_dispatch_arity_mismatch() {
    for kind in WorkoutKind::ALL {
        let data = vec![1.0; kind.arity() + 1];
        assert_eq!(
            read_package(kind.tag(), &data),
            Err(WorkoutError::ArityMismatch {
                kind,
                expected: kind.arity(),
                actual: kind.arity() + 1,
            })
        );
    }
}

#[test]
fn test_dispatch_type_mismatch_on_step_count() {
    assert_eq!(
        read_package("RUN", &[150.5, 1.0, 75.0]),
        Err(WorkoutError::TypeMismatch {
            field: "action",
            value: 150.5,
        })
    );
}

#[test]
fn test_unsupported_kind_message() {
    let err = read_package("XYZ", &[]).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported workout type: XYZ");
}
