//! Integration tests for progress persistence across restarts.
//!
//! A repository is built on an on-disk SQLite store, driven with a manual
//! clock, dropped, and rebuilt from the same file.

use chrono::{NaiveDate, NaiveDateTime};
use fitnessdaily::storage::{keys, Database, StatsSettings};
use fitnessdaily::{DataRepository, ManualClock, Preferences, Workout};
use std::path::Path;
use std::rc::Rc;

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 12, 28)
        .unwrap()
        .and_hms_opt(7, 15, 0)
        .unwrap()
}

fn open(path: &Path, clock: &Rc<ManualClock>) -> DataRepository {
    let db = Database::open(path).expect("Failed to open database");
    DataRepository::new(
        Preferences::new(db),
        Box::new(Rc::clone(clock)),
        StatsSettings::default(),
    )
}

#[test]
fn test_restore_reproduces_progress() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fitnessdaily.db");
    let clock = Rc::new(ManualClock::new(start()));

    {
        let mut repo = open(&path, &clock);
        for _ in 0..3 {
            let now = repo.now();
            repo.add_workout(Workout::new("Run", 30, 250, now));
            clock.advance_days(1);
        }
        repo.complete_goal();
    }

    let repo = open(&path, &clock);
    let progress = repo.achievement_progress();
    assert_eq!(progress.workout_count, 3);
    assert_eq!(progress.goals_completed, 1);
    assert_eq!(progress.current_streak, 3);
    assert_eq!(
        repo.tracker().streak().last_day(),
        NaiveDate::from_ymd_opt(2024, 12, 30)
    );

    // Lists are not persisted.
    assert!(repo.workouts().is_empty());

    let first_steps = &repo.achievements()[0];
    assert!(first_steps.earned);
    assert_eq!(first_steps.earned_date, Some(start()));
}

#[test]
fn test_streak_continues_after_restart() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fitnessdaily.db");
    let clock = Rc::new(ManualClock::new(start()));

    {
        let mut repo = open(&path, &clock);
        for _ in 0..6 {
            let now = repo.now();
            repo.add_workout(Workout::new("Ride", 60, 500, now));
            clock.advance_days(1);
        }
    }

    let mut repo = open(&path, &clock);
    let now = repo.now();
    let unlocked = repo.add_workout(Workout::new("Ride", 60, 500, now));
    assert_eq!(repo.achievement_progress().current_streak, 7);
    assert_eq!(unlocked.map(|a| a.id), Some("ach_6".to_string()));
}

#[test]
fn test_clear_all_data_is_persisted() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fitnessdaily.db");
    let clock = Rc::new(ManualClock::new(start()));

    {
        let mut repo = open(&path, &clock);
        repo.seed_sample_data();
        repo.preferences_mut().set_first_launch_completed();
        repo.clear_all_data();
    }

    let repo = open(&path, &clock);
    assert_eq!(repo.achievement_progress().workout_count, 0);
    assert_eq!(repo.achievement_progress().meal_count, 0);
    assert!(repo.earned_achievements().is_empty());
    assert!(!repo
        .preferences()
        .get_bool(keys::NS_ACHIEVEMENTS, &keys::achievement_earned("ach_1"), false));
    assert!(!repo.preferences().is_first_launch());
}

#[test]
fn test_delete_never_decrements() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("fitnessdaily.db");
    let clock = Rc::new(ManualClock::new(start()));

    {
        let mut repo = open(&path, &clock);
        let workout = Workout::new("Run", 30, 250, start());
        let id = workout.id;
        repo.add_workout(workout);
        repo.delete_workout(id);
    }

    let repo = open(&path, &clock);
    assert_eq!(repo.achievement_progress().workout_count, 1);
}
