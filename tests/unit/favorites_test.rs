//! Unit tests for favorite workout templates.

use chrono::NaiveDate;
use fitnessdaily::workouts::{FavoriteTemplates, TemplateKey, Workout};

fn workout(name: &str, duration: u32, calories: u32) -> Workout {
    let date = NaiveDate::from_ymd_opt(2024, 3, 3)
        .unwrap()
        .and_hms_opt(6, 30, 0)
        .unwrap();
    Workout::new(name, duration, calories, date)
}

#[test]
fn test_same_key_added_twice_yields_one_entry() {
    let mut favorites = FavoriteTemplates::new();
    assert!(favorites.add(&workout("Morning Cardio", 45, 350)));
    assert!(!favorites.add(&workout("Morning Cardio", 45, 350)));
    assert_eq!(favorites.len(), 1);
}

#[test]
fn test_key_includes_duration_and_calories() {
    let mut favorites = FavoriteTemplates::new();
    favorites.add(&workout("Morning Cardio", 45, 350));
    favorites.add(&workout("Morning Cardio", 30, 350));
    favorites.add(&workout("Morning Cardio", 45, 300));
    assert_eq!(favorites.len(), 3);

    assert_eq!(favorites.remove(&TemplateKey::new("Morning Cardio", 45, 350)), 1);
    assert_eq!(favorites.len(), 2);
}

#[test]
fn test_stored_copy_is_favorite() {
    let mut favorites = FavoriteTemplates::new();
    let original = workout("Yoga", 40, 150);
    favorites.add(&original);

    assert!(!original.is_favorite);
    assert!(favorites.get(0).map(|t| t.is_favorite).unwrap_or(false));
}
