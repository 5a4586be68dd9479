//! Unit tests for rolling-window statistics and weekly progress.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fitnessdaily::metrics::{weekly_progress, DataStatus, Summary};
use fitnessdaily::nutrition::{Meal, MealType};
use fitnessdaily::storage::StatsSettings;
use fitnessdaily::workouts::Workout;

fn now() -> NaiveDateTime {
    // Thursday
    NaiveDate::from_ymd_opt(2024, 8, 15)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

#[test]
fn test_empty_summary() {
    let summary = Summary::compute(&[], &[], now(), &StatsSettings::default());
    assert_eq!(summary.total_workouts, 0);
    assert_eq!(summary.average_daily_calories, 0);
    assert_eq!(summary.data_status(), DataStatus::Empty);
    assert_eq!(summary.weight_loss_progress(), 0.0);
    // 2000 maintenance, nothing eaten: clamped to the cap.
    assert_eq!(summary.calorie_deficit(), 500.0);
}

#[test]
fn test_deficit_and_weight_loss() {
    let workouts: Vec<_> = (0..60)
        .map(|i| Workout::new("Run", 30, 100, now() - Duration::hours(i * 6)))
        .collect();
    let meals: Vec<_> = (0..30)
        .map(|i| Meal::new("Dinner", 2100, MealType::Dinner, now() - Duration::days(i)))
        .collect();

    let summary = Summary::compute(&workouts, &meals, now(), &StatsSettings::default());
    assert_eq!(summary.total_workouts, 60);
    assert_eq!(summary.weight_loss_progress(), 5.0);
    assert_eq!(summary.average_daily_calories, 2100);
    // (60000 - 63000 + 6000) / 30
    assert!((summary.calorie_deficit() - 100.0).abs() < 1e-9);
    assert_eq!(summary.data_status(), DataStatus::Complete);
}

#[test]
fn test_weekly_progress_caps_at_100() {
    let workouts: Vec<_> = (0..8)
        .map(|i| Workout::new("Swim", 30, 200, now() - Duration::hours(i)))
        .collect();
    let weeks = weekly_progress(&workouts, now(), 5);

    assert_eq!(weeks.len(), 4);
    assert_eq!(weeks[3].label, "W1");
    assert_eq!(weeks[3].workouts, 8);
    assert_eq!(weeks[3].percent, 100);
    assert!(weeks[..3].iter().all(|w| w.percent == 0));
}

#[test]
fn test_weekly_progress_spans_year_boundary() {
    let new_year = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let workouts = vec![
        Workout::new("Run", 30, 250, new_year - Duration::days(7)),
        Workout::new("Run", 30, 250, new_year - Duration::days(14)),
    ];
    let weeks = weekly_progress(&workouts, new_year, 5);

    let percents: Vec<_> = weeks.iter().map(|w| w.percent).collect();
    assert_eq!(percents, vec![0, 20, 20, 0]);
}
