//! Integration tests for a full text session.

use chrono::NaiveDate;
use fitnessdaily::storage::StatsSettings;
use fitnessdaily::{AppConfig, DataRepository, FitnessApp, ManualClock, Preferences};
use std::rc::Rc;

fn app_at(clock: &Rc<ManualClock>) -> FitnessApp {
    let repo = DataRepository::new(
        Preferences::in_memory(),
        Box::new(Rc::clone(clock)),
        StatsSettings::default(),
    );
    FitnessApp::new(repo, AppConfig::default())
}

fn run(app: &mut FitnessApp, script: &str) -> String {
    let mut out = Vec::new();
    app.run_session(script.as_bytes(), &mut out)
        .expect("session failed");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_week_of_workouts_session() {
    let clock = Rc::new(ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap(),
    ));
    let mut app = app_at(&clock);

    let mut transcript = String::new();
    for _ in 0..7 {
        transcript.push_str(&run(&mut app, "workout add \"Morning Run\" 30 250\n"));
        clock.advance_days(1);
    }

    assert!(transcript.contains("Achievement Unlocked: First Steps! - Complete your first workout"));
    assert!(transcript.contains("Achievement Unlocked: Week Warrior! - 7-day workout streak"));

    let achievements = run(&mut app, "achievements\n");
    assert!(achievements.starts_with("Achievements: 2/7 earned"));
    assert!(achievements.contains("[x] First Steps"));
    assert!(achievements.contains("[ ] Regular Runner"));
    assert!(achievements.contains("7/10"));
}

#[test]
fn test_meal_and_goal_session() {
    let clock = Rc::new(ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    ));
    let mut app = app_at(&clock);

    let script = "\
meal add \"Chicken Salad\" 350 --protein 30 --carbs 20 --fat 12
meal add Soup
meal list
goal add \"Lose weight\" 5 --unit kg
goal toggle 1
goal list
progress
quit
";
    let out = run(&mut app, script);

    assert!(out.contains("Logged Chicken Salad (350 kcal, LUNCH)"));
    assert!(out.contains("P: 30.0g C: 20.0g F: 12.0g"));
    assert!(out.contains("Completed goal Lose weight"));
    assert!(out.contains("1. [x] Lose weight (WEIGHT_LOSS)"));
    assert!(out.contains("Overall goal progress: 100%"));
    assert_eq!(app.repository().meals().len(), 1);
    assert_eq!(app.repository().preferences().completed_goals_count(), 1);
}

#[test]
fn test_reset_all_data() {
    let clock = Rc::new(ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    ));
    let mut app = app_at(&clock);
    run(&mut app, "workout add Run 30 250\nworkout favorite 1\n");
    app.run_tutorial(true);

    app.reset_all_data();

    assert!(app.repository().workouts().is_empty());
    assert!(app.repository().favorite_templates().is_empty());
    assert!(app.repository().earned_achievements().is_empty());
    assert!(!app.repository().preferences().is_first_launch());
}

#[test]
fn test_star_workout_while_logging() {
    let clock = Rc::new(ManualClock::new(
        NaiveDate::from_ymd_opt(2024, 4, 12)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap(),
    ));
    let mut app = app_at(&clock);

    let script = "\
workout add \"Leg Day\" 45 380 --favorite
workout add \"Leg Day\" 45 380 --favorite
";
    run(&mut app, script);

    assert_eq!(run(&mut app, "workout favorites\n"), "1. Leg Day (45min, 380cal)\n");
    assert_eq!(app.repository().workouts().len(), 2);
    assert_eq!(app.repository().favorite_templates().len(), 1);
    assert!(app.repository().workouts().iter().all(|w| w.is_favorite));
}
