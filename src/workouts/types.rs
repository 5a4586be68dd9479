//! Workout types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single exercise inside a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
        }
    }
}

/// A logged workout.
///
/// Workouts are immutable once logged; toggling the favorite flag replaces the
/// record with a copy (see [`Workout::with_favorite`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier, assigned at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned
    pub calories_burned: u32,
    /// When the workout was logged (local time)
    pub date: NaiveDateTime,
    /// Marked as favorite
    pub is_favorite: bool,
    /// Exercises performed
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create a new workout with a fresh identifier.
    pub fn new(
        name: impl Into<String>,
        duration_minutes: u32,
        calories_burned: u32,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            duration_minutes,
            calories_burned,
            date,
            is_favorite: false,
            exercises: Vec::new(),
        }
    }

    /// Set the favorite flag (builder style).
    pub fn favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Attach exercises (builder style).
    pub fn with_exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = exercises;
        self
    }

    /// Copy of this workout with a different favorite flag.
    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }

    /// Deduplication key for favorite templates.
    pub fn template_key(&self) -> TemplateKey {
        TemplateKey::new(&self.name, self.duration_minutes, self.calories_burned)
    }

    /// Whether this workout matches a template key.
    pub fn matches(&self, key: &TemplateKey) -> bool {
        self.name == key.name
            && self.duration_minutes == key.duration_minutes
            && self.calories_burned == key.calories_burned
    }

    /// One-line description used in lists.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}min, {}cal)",
            self.name, self.duration_minutes, self.calories_burned
        )
    }
}

/// Identity of a favorite template: `(name, duration, calories)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateKey {
    pub name: String,
    pub duration_minutes: u32,
    pub calories_burned: u32,
}

impl TemplateKey {
    pub fn new(name: &str, duration_minutes: u32, calories_burned: u32) -> Self {
        Self {
            name: name.to_string(),
            duration_minutes,
            calories_burned,
        }
    }
}
