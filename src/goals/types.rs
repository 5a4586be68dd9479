//! Fitness goal type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of a fitness goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GoalType {
    #[default]
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
}

impl std::fmt::Display for GoalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalType::WeightLoss => write!(f, "WEIGHT_LOSS"),
            GoalType::MuscleGain => write!(f, "MUSCLE_GAIN"),
            GoalType::Endurance => write!(f, "ENDURANCE"),
            GoalType::Flexibility => write!(f, "FLEXIBILITY"),
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = String;

    /// Accepts `weight_loss`, `weight-loss` or `weightloss` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "weightloss" => Ok(GoalType::WeightLoss),
            "musclegain" => Ok(GoalType::MuscleGain),
            "endurance" => Ok(GoalType::Endurance),
            "flexibility" => Ok(GoalType::Flexibility),
            _ => Err(format!("unknown goal type '{}'", s.trim())),
        }
    }
}

/// A user goal with a numeric target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessGoal {
    /// Unique identifier
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Description
    pub description: String,
    /// Value that counts as done
    pub target_value: f64,
    /// Value reached so far
    pub current_value: f64,
    /// Unit label ("kg", "workouts", ...)
    pub unit: String,
    /// Optional deadline
    pub deadline: Option<NaiveDate>,
    /// Category
    pub goal_type: GoalType,
    /// Marked complete by the user
    pub is_completed: bool,
}

impl FitnessGoal {
    /// Create an open goal.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        target_value: f64,
        current_value: f64,
        unit: impl Into<String>,
        goal_type: GoalType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            target_value,
            current_value,
            unit: unit.into(),
            deadline: None,
            goal_type,
            is_completed: false,
        }
    }

    /// Progress toward the target, 0..=100. Completed goals read 100.
    pub fn progress_percent(&self) -> u8 {
        if self.is_completed {
            return 100;
        }
        if self.target_value <= 0.0 || !self.target_value.is_finite() {
            return 0;
        }
        let percent = (self.current_value / self.target_value) * 100.0;
        percent.clamp(0.0, 100.0) as u8
    }

    /// Progress line used in lists.
    pub fn progress_line(&self) -> String {
        format!(
            "Progress: {}/{} {} ({}%)",
            self.current_value,
            self.target_value,
            self.unit,
            self.progress_percent()
        )
    }
}
