//! Unit tests for the consecutive-day workout streak.

use chrono::{Duration, NaiveDate};
use fitnessdaily::achievements::{Streak, StreakChange};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 26).unwrap() + Duration::days(offset)
}

#[test]
fn test_consecutive_days_extend() {
    let mut streak = Streak::default();
    assert_eq!(streak.record(day(0)), StreakChange::Reset);
    for offset in 1..7 {
        assert_eq!(streak.record(day(offset)), StreakChange::Extended);
    }
    assert_eq!(streak.current(), 7);
}

#[test]
fn test_gap_resets_to_one() {
    // Every gap larger than one day restarts the streak, whatever its length.
    for gap in 2..10 {
        let mut streak = Streak::default();
        streak.record(day(0));
        streak.record(day(1));
        assert_eq!(streak.record(day(1 + gap)), StreakChange::Reset);
        assert_eq!(streak.current(), 1);
    }
}

#[test]
fn test_same_day_is_unchanged() {
    let mut streak = Streak::default();
    streak.record(day(0));
    streak.record(day(1));
    assert_eq!(streak.record(day(1)), StreakChange::Unchanged);
    assert_eq!(streak.current(), 2);
}

#[test]
fn test_crosses_leap_day_and_month_end() {
    // 2024-02-28, 02-29, 03-01
    let mut streak = Streak::default();
    streak.record(day(2));
    streak.record(day(3));
    streak.record(day(4));
    assert_eq!(streak.current(), 3);
    assert_eq!(streak.last_day_string().as_deref(), Some("2024-03-01"));
}

#[test]
fn test_restored_streak_continues() {
    let mut streak = Streak::from_parts(4, Streak::parse_day("2024-02-26"));
    assert_eq!(streak.record(day(1)), StreakChange::Extended);
    assert_eq!(streak.current(), 5);

    assert_eq!(Streak::parse_day("26/02/2024"), None);
}
