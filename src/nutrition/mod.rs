//! Meal logging.

pub mod types;

pub use types::{Meal, MealType};
