//! Form input validation.
//!
//! Forms hold the raw text the user typed. `validate` trims every field and
//! either builds the domain value or returns an [`InputError`] whose message
//! is shown to the user as-is.

use crate::goals::{FitnessGoal, GoalType};
use crate::nutrition::{Meal, MealType};
use crate::workouts::Workout;
use chrono::NaiveDateTime;

/// Default goal description when none is given.
pub const DEFAULT_GOAL_DESCRIPTION: &str = "Personal fitness goal";

/// Default goal unit when none is given.
pub const DEFAULT_GOAL_UNIT: &str = "units";

/// Validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please fill all fields")]
    MissingWorkoutFields,
    #[error("Please fill name and calories")]
    MissingMealFields,
    #[error("Please fill title and target")]
    MissingGoalFields,
    #[error("Please enter valid numbers")]
    InvalidNumber,
}

/// Raw workout form.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    pub name: String,
    pub duration: String,
    pub calories: String,
}

impl WorkoutForm {
    pub fn new(name: &str, duration: &str, calories: &str) -> Self {
        Self {
            name: name.to_string(),
            duration: duration.to_string(),
            calories: calories.to_string(),
        }
    }

    /// Build a workout logged at `now`.
    pub fn validate(&self, now: NaiveDateTime) -> Result<Workout, InputError> {
        let name = self.name.trim();
        let duration = self.duration.trim();
        let calories = self.calories.trim();

        if name.is_empty() || duration.is_empty() || calories.is_empty() {
            return Err(InputError::MissingWorkoutFields);
        }

        let duration = duration
            .parse::<u32>()
            .map_err(|_| InputError::InvalidNumber)?;
        let calories = calories
            .parse::<u32>()
            .map_err(|_| InputError::InvalidNumber)?;

        Ok(Workout::new(name, duration, calories, now))
    }
}

/// Raw meal form. Macros and category are optional.
#[derive(Debug, Clone, Default)]
pub struct MealForm {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub meal_type: String,
}

impl MealForm {
    pub fn new(name: &str, calories: &str) -> Self {
        Self {
            name: name.to_string(),
            calories: calories.to_string(),
            ..Self::default()
        }
    }

    /// Set the macro fields (builder style).
    pub fn macros(mut self, protein: &str, carbs: &str, fat: &str) -> Self {
        self.protein = protein.to_string();
        self.carbs = carbs.to_string();
        self.fat = fat.to_string();
        self
    }

    /// Set the category field (builder style).
    pub fn meal_type(mut self, meal_type: &str) -> Self {
        self.meal_type = meal_type.to_string();
        self
    }

    /// Build a meal logged at `now`.
    ///
    /// Blank or unparsable macros read as 0 and an unknown category falls
    /// back to lunch.
    pub fn validate(&self, now: NaiveDateTime) -> Result<Meal, InputError> {
        let name = self.name.trim();
        let calories = self.calories.trim();

        if name.is_empty() || calories.is_empty() {
            return Err(InputError::MissingMealFields);
        }

        let calories = calories
            .parse::<u32>()
            .map_err(|_| InputError::InvalidNumber)?;
        let meal_type = self.meal_type.parse::<MealType>().unwrap_or_default();

        Ok(Meal::new(name, calories, meal_type, now).with_macros(
            lenient_number(&self.protein),
            lenient_number(&self.carbs),
            lenient_number(&self.fat),
        ))
    }
}

/// Raw goal form.
#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub title: String,
    pub description: String,
    pub target: String,
    pub current: String,
    pub unit: String,
}

impl GoalForm {
    pub fn new(title: &str, target: &str) -> Self {
        Self {
            title: title.to_string(),
            target: target.to_string(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn current(mut self, current: &str) -> Self {
        self.current = current.to_string();
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    /// Build an open goal of the given category.
    ///
    /// Only `target` must be a number; a blank or unparsable `current`
    /// reads as 0.
    pub fn validate(&self, goal_type: GoalType) -> Result<FitnessGoal, InputError> {
        let title = self.title.trim();
        let target = self.target.trim();

        if title.is_empty() || target.is_empty() {
            return Err(InputError::MissingGoalFields);
        }

        let target = parse_finite(target).ok_or(InputError::InvalidNumber)?;
        let current = lenient_number(&self.current);

        let description = non_empty_or(&self.description, DEFAULT_GOAL_DESCRIPTION);
        let unit = non_empty_or(&self.unit, DEFAULT_GOAL_UNIT);

        Ok(FitnessGoal::new(
            title,
            description,
            target,
            current,
            unit,
            goal_type,
        ))
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn lenient_number(raw: &str) -> f64 {
    parse_finite(raw.trim()).unwrap_or(0.0)
}

fn non_empty_or<'a>(raw: &'a str, default: &'a str) -> &'a str {
    match raw.trim() {
        "" => default,
        trimmed => trimmed,
    }
}
