//! Unit tests for achievement unlocking and counters.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fitnessdaily::achievements::AchievementTracker;

fn at(days: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap()
        + Duration::days(days)
}

#[test]
fn test_workout_counter_grows_by_n() {
    let mut tracker = AchievementTracker::new();
    for n in 0..25 {
        tracker.record_workout(at(n / 3));
    }
    assert_eq!(tracker.progress().workout_count, 25);
}

#[test]
fn test_ten_workouts_unlock_regular_runner() {
    let mut tracker = AchievementTracker::new();
    let mut unlocked = Vec::new();
    for _ in 0..10 {
        unlocked.extend(tracker.record_workout(at(0)));
    }

    let ids: Vec<_> = unlocked.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["ach_1", "ach_2"]);
}

#[test]
fn test_week_streak_unlocks_week_warrior() {
    let mut tracker = AchievementTracker::new();
    let mut last = None;
    for d in 0..7 {
        last = tracker.record_workout(at(d));
    }
    assert_eq!(tracker.progress().current_streak, 7);
    assert_eq!(last.map(|a| a.title), Some("Week Warrior".to_string()));
}

#[test]
fn test_twenty_meals_unlock_healthy_eater() {
    let mut tracker = AchievementTracker::new();
    let unlocks: Vec<_> = (0..20).filter_map(|_| tracker.record_meal(at(0))).collect();
    assert_eq!(unlocks.len(), 1);
    assert_eq!(unlocks[0].id, "ach_4");
}

#[test]
fn test_earned_flags_survive_later_events() {
    let mut tracker = AchievementTracker::new();
    tracker.record_workout(at(0));
    let first_date = tracker.achievements()[0].earned_date;

    // A gap resets the streak but never the earned flags.
    tracker.record_workout(at(10));
    tracker.record_meal(at(11));
    tracker.record_goal_completed(at(12));

    assert!(tracker.achievements()[0].earned);
    assert_eq!(tracker.achievements()[0].earned_date, first_date);
    assert_eq!(tracker.progress().current_streak, 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut tracker = AchievementTracker::new();
    for d in 0..3 {
        tracker.record_workout(at(d));
        tracker.record_meal(at(d));
    }
    tracker.reset();

    assert_eq!(tracker.progress().workout_count, 0);
    assert_eq!(tracker.progress().meal_count, 0);
    assert_eq!(tracker.progress().current_streak, 0);
    assert!(tracker.earned().is_empty());
    assert_eq!(tracker.completion_percentage(), 0.0);
}
