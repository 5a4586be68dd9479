//! Unit tests for form validation messages.

use chrono::NaiveDate;
use fitnessdaily::goals::GoalType;
use fitnessdaily::validation::{GoalForm, InputError, MealForm, WorkoutForm};

#[test]
fn test_user_facing_messages() {
    let now = NaiveDate::from_ymd_opt(2024, 5, 5)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let cases: Vec<(Result<(), InputError>, &str)> = vec![
        (
            WorkoutForm::new("", "30", "200").validate(now).map(|_| ()),
            "Please fill all fields",
        ),
        (
            WorkoutForm::new("Run", "30", "-5").validate(now).map(|_| ()),
            "Please enter valid numbers",
        ),
        (
            MealForm::new("Soup", "   ").validate(now).map(|_| ()),
            "Please fill name and calories",
        ),
        (
            GoalForm::new("", "5").validate(GoalType::WeightLoss).map(|_| ()),
            "Please fill title and target",
        ),
    ];

    for (result, message) in cases {
        assert_eq!(result.unwrap_err().to_string(), message);
    }
}

#[test]
fn test_goal_form_keeps_given_fields() {
    let goal = GoalForm::new("Squat", "100")
        .current("60")
        .unit("kg")
        .description("Back squat 1RM")
        .validate(GoalType::MuscleGain)
        .unwrap();

    assert_eq!(goal.unit, "kg");
    assert_eq!(goal.description, "Back squat 1RM");
    assert_eq!(goal.progress_percent(), 60);
    assert_eq!(goal.goal_type, GoalType::MuscleGain);
}

#[test]
fn test_goal_form_current_falls_back_to_zero() {
    for current in ["", "   ", "abc", "inf"] {
        let goal = GoalForm::new("Plank", "5")
            .current(current)
            .validate(GoalType::Endurance)
            .unwrap();
        assert_eq!(goal.current_value, 0.0);
    }

    let err = GoalForm::new("Plank", "abc")
        .current("2")
        .validate(GoalType::Endurance)
        .unwrap_err();
    assert_eq!(err, InputError::InvalidNumber);
}
