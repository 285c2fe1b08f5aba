//! Unit tests for end-to-end report output.

use fitness_tracker::metrics::{OutputFormat, ReportOptions};
use fitness_tracker::sensors::sample_packages;
use fitness_tracker::{write_report, SensorPackage, WorkoutError};

fn report(packages: &[SensorPackage], options: &ReportOptions) -> (String, Result<usize, WorkoutError>) {
    let mut out = Vec::new();
    let result = write_report(packages, &mut out, options).map(|o| o.written);
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn test_sample_dataset_output() {
    let (text, result) = report(&sample_packages(), &ReportOptions::default());

    assert_eq!(result, Ok(3));
    assert_eq!(
        text,
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.\n\
         Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.\n\
         Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.\n"
    );
}

#[test]
fn test_running_end_to_end() {
    let packages = [SensorPackage::new("RUN", vec![9000.0, 1.0, 75.0])];
    let (text, result) = report(&packages, &ReportOptions::default());

    assert_eq!(result, Ok(1));
    assert!(text.contains("Тип тренировки: Running"));
    assert!(text.contains("Длительность: 1.000 ч."));
    assert!(text.contains("Дистанция: 5.850 км"));
    assert!(text.contains("Ср. скорость: 5.850 км/ч"));
    // (18 * 5.85 - 20) * 75 / 1000 * 60 = 383.85
    assert!(text.contains("Потрачено ккал: 383.850."));
}

#[test]
fn test_unsupported_kind_produces_no_output() {
    let packages = [SensorPackage::new("XYZ", vec![15000.0, 1.0, 75.0])];
    let (text, result) = report(&packages, &ReportOptions::default());

    assert_eq!(result, Err(WorkoutError::UnsupportedKind("XYZ".to_string())));
    assert!(text.is_empty());
}

#[test]
fn test_fail_fast_keeps_earlier_lines() {
    let packages = [
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("XYZ", vec![1.0]),
        SensorPackage::new("RUN", vec![9000.0, 1.0, 75.0]),
    ];
    let (text, result) = report(&packages, &ReportOptions::default());

    assert!(result.is_err());
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("Дистанция: 9.750 км"));
}

#[test]
fn test_keep_going_preserves_order() {
    let packages = [
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        SensorPackage::new("SWM", vec![720.0, 1.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];
    let options = ReportOptions {
        keep_going: true,
        ..Default::default()
    };
    let (text, result) = report(&packages, &options);

    assert_eq!(result, Ok(2));
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].contains("SportsWalking"));
    assert!(lines[1].contains("Running"));
}

#[test]
fn test_json_output() {
    let options = ReportOptions {
        format: OutputFormat::Json,
        ..Default::default()
    };
    let (text, result) = report(&sample_packages(), &options);

    assert_eq!(result, Ok(3));
    let kinds: Vec<String> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["training_type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(kinds, ["Swimming", "Running", "SportsWalking"]);
}
