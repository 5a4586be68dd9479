//! Meal types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Meal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    #[default]
    Lunch,
    Dinner,
    Snack,
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "BREAKFAST"),
            MealType::Lunch => write!(f, "LUNCH"),
            MealType::Dinner => write!(f, "DINNER"),
            MealType::Snack => write!(f, "SNACK"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            other => Err(format!("unknown meal type '{}'", other)),
        }
    }
}

/// A logged meal. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Category
    pub meal_type: MealType,
    /// When the meal was logged (local time)
    pub date: NaiveDateTime,
}

impl Meal {
    /// Create a meal with zero macros.
    pub fn new(
        name: impl Into<String>,
        calories: u32,
        meal_type: MealType,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            calories,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            meal_type,
            date,
        }
    }

    /// Set macronutrients in grams (builder style).
    pub fn with_macros(mut self, protein: f64, carbs: f64, fat: f64) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }

    /// Macro line used in lists, e.g. `P: 30.0g C: 20.0g F: 12.0g`.
    pub fn macros_summary(&self) -> String {
        format!(
            "P: {:.1}g C: {:.1}g F: {:.1}g",
            self.protein, self.carbs, self.fat
        )
    }
}
