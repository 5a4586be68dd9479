//! Rolling-window statistics over logged workouts and meals.

use crate::nutrition::Meal;
use crate::storage::config::StatsSettings;
use crate::workouts::Workout;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Weight-loss goal credit per workout, in kg.
const WEIGHT_LOSS_PER_WORKOUT_KG: f64 = 0.1;

/// Cap for the weight-loss estimate, in kg.
const WEIGHT_LOSS_CAP_KG: f64 = 5.0;

/// Cap for the daily calorie deficit estimate.
const CALORIE_DEFICIT_CAP: f64 = 500.0;

/// Start of the rolling window ending at `now`.
pub fn window_start(now: NaiveDateTime, window_days: u32) -> NaiveDateTime {
    now - Duration::days(i64::from(window_days))
}

/// Workouts logged at or after the window start.
pub fn workouts_in_window(
    workouts: &[Workout],
    now: NaiveDateTime,
    window_days: u32,
) -> Vec<Workout> {
    let start = window_start(now, window_days);
    workouts.iter().filter(|w| w.date >= start).cloned().collect()
}

/// Meals logged at or after the window start.
pub fn meals_in_window(meals: &[Meal], now: NaiveDateTime, window_days: u32) -> Vec<Meal> {
    let start = window_start(now, window_days);
    meals.iter().filter(|m| m.date >= start).cloned().collect()
}

/// Aggregated statistics for the rolling window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Window length in days
    pub window_days: u32,
    /// Calories burned by workouts in the window
    pub total_calories_burned: u32,
    /// Workouts in the window
    pub total_workouts: u32,
    /// Meal calories in the window divided by the window length
    pub average_daily_calories: u32,
    /// Protein in the window, grams
    pub total_protein: f64,
    /// Carbohydrates in the window, grams
    pub total_carbs: f64,
    /// Fat in the window, grams
    pub total_fat: f64,
    /// Workouts logged in total (all time, in memory)
    pub logged_workouts: usize,
    /// Meals logged in total (all time, in memory)
    pub logged_meals: usize,
    /// Maintenance calories used for the deficit estimate
    pub maintenance_calories: u32,
}

impl Summary {
    /// Compute the summary for the window ending at `now`.
    pub fn compute(
        workouts: &[Workout],
        meals: &[Meal],
        now: NaiveDateTime,
        settings: &StatsSettings,
    ) -> Self {
        let window_days = settings.window_days;
        let recent_workouts = workouts_in_window(workouts, now, window_days);
        let recent_meals = meals_in_window(meals, now, window_days);

        let total_calories_burned = recent_workouts
            .iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.calories_burned));

        let meal_calories = recent_meals
            .iter()
            .fold(0u32, |acc, m| acc.saturating_add(m.calories));
        let average_daily_calories = if recent_meals.is_empty() || window_days == 0 {
            0
        } else {
            meal_calories / window_days
        };

        Self {
            window_days,
            total_calories_burned,
            total_workouts: u32::try_from(recent_workouts.len()).unwrap_or(u32::MAX),
            average_daily_calories,
            total_protein: recent_meals.iter().map(|m| m.protein).sum(),
            total_carbs: recent_meals.iter().map(|m| m.carbs).sum(),
            total_fat: recent_meals.iter().map(|m| m.fat).sum(),
            logged_workouts: workouts.len(),
            logged_meals: meals.len(),
            maintenance_calories: settings.maintenance_calories,
        }
    }

    /// Estimated weight lost (kg), 0.1 kg per workout capped at 5 kg.
    pub fn weight_loss_progress(&self) -> f64 {
        (f64::from(self.total_workouts) * WEIGHT_LOSS_PER_WORKOUT_KG).min(WEIGHT_LOSS_CAP_KG)
    }

    /// Estimated daily calorie deficit, clamped to 0..=500.
    pub fn calorie_deficit(&self) -> f64 {
        let days = f64::from(self.window_days.max(1));
        let maintenance = f64::from(self.maintenance_calories) * days;
        let eaten = f64::from(self.average_daily_calories) * days;
        let burned = f64::from(self.total_calories_burned);

        ((maintenance - eaten + burned) / days).clamp(0.0, CALORIE_DEFICIT_CAP)
    }

    /// Which kinds of data have been logged.
    pub fn data_status(&self) -> DataStatus {
        DataStatus::from_counts(self.logged_workouts, self.logged_meals)
    }
}

/// Coverage of logged data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataStatus {
    /// Nothing logged yet
    Empty,
    /// Both workouts and meals logged
    Complete,
    /// Only workouts logged
    WorkoutsOnly,
    /// Only meals logged
    MealsOnly,
}

impl DataStatus {
    pub fn from_counts(workouts: usize, meals: usize) -> Self {
        match (workouts > 0, meals > 0) {
            (false, false) => DataStatus::Empty,
            (true, true) => DataStatus::Complete,
            (true, false) => DataStatus::WorkoutsOnly,
            (false, true) => DataStatus::MealsOnly,
        }
    }

    /// Hint shown under the statistics.
    pub fn hint(&self) -> &'static str {
        match self {
            DataStatus::Empty => "Add workouts and meals to see progress!",
            DataStatus::Complete => "Data integrated successfully!",
            DataStatus::WorkoutsOnly => "Workout data loaded. Add meals for nutrition data.",
            DataStatus::MealsOnly => "Meal data loaded. Add workouts for exercise data.",
        }
    }
}
