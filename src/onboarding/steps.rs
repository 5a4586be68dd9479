//! Tutorial pages.

use serde::{Deserialize, Serialize};

/// Pages of the first-launch tutorial, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Welcome and overview
    #[default]
    Welcome,
    /// Workout logging and streaks
    TrackWorkouts,
    /// Meal logging and macros
    MonitorNutrition,
    /// Goals and achievements
    AchieveGoals,
    /// Sharing progress
    ShareJourney,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Welcome,
            OnboardingStep::TrackWorkouts,
            OnboardingStep::MonitorNutrition,
            OnboardingStep::AchieveGoals,
            OnboardingStep::ShareJourney,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        Self::all().get(self.index() + 1).copied()
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| Self::all().get(idx).copied())
    }

    /// Get the title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "Welcome to FitnessDaily",
            OnboardingStep::TrackWorkouts => "Track Your Workouts",
            OnboardingStep::MonitorNutrition => "Monitor Nutrition",
            OnboardingStep::AchieveGoals => "Achieve Your Goals",
            OnboardingStep::ShareJourney => "Share Your Journey",
        }
    }

    /// Get the description for this step.
    pub fn description(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => {
                "Your personal fitness companion to help you achieve your health goals and transform your lifestyle."
            }
            OnboardingStep::TrackWorkouts => {
                "Log your exercises, monitor calories burned, and build impressive workout streaks to stay motivated."
            }
            OnboardingStep::MonitorNutrition => {
                "Easily log your meals, track calories, and monitor macronutrients for balanced nutrition."
            }
            OnboardingStep::AchieveGoals => {
                "Set personalized fitness goals, track your progress, and celebrate your achievements along the way."
            }
            OnboardingStep::ShareJourney => {
                "Share your progress, streaks, and achievements with friends to stay accountable and inspired."
            }
        }
    }

    /// Check if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::Welcome
    }

    /// Check if this is the last step.
    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::ShareJourney
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
