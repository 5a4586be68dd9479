//! FitnessDaily - personal fitness tracker
//!
//! Logs workouts and meals, tracks goals, streaks and achievements, and keeps
//! progress in a small SQLite-backed preference store. The `fitness-daily`
//! binary is a thin command-line front end over [`DataRepository`].

pub mod achievements;
pub mod app;
pub mod clock;
pub mod goals;
pub mod metrics;
pub mod nutrition;
pub mod onboarding;
pub mod quotes;
pub mod repository;
pub mod storage;
pub mod validation;
pub mod workouts;

// Re-export commonly used types
pub use achievements::{Achievement, AchievementTracker};
pub use app::FitnessApp;
pub use clock::{Clock, ManualClock, SystemClock};
pub use goals::{FitnessGoal, GoalBoard};
pub use nutrition::{Meal, MealType};
pub use repository::DataRepository;
pub use storage::config::AppConfig;
pub use storage::preferences::Preferences;
pub use workouts::Workout;
