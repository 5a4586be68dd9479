//! Fitness goals module.
//!
//! Goals are user-defined numeric targets (lose 5 kg, 20 workouts a month).
//! Completing one feeds the "goals completed" achievement counter.

pub mod manager;
pub mod types;

pub use manager::{GoalBoard, GoalError, GoalToggle};
pub use types::{FitnessGoal, GoalType};
