//! Achievement and streak tracking.
//!
//! Every workout, meal or completed goal bumps a counter and re-evaluates the
//! unearned part of a fixed catalog. Earned flags only ever go from false to
//! true; the only way back is [`AchievementTracker::reset`].

pub mod definitions;
pub mod streak;

use crate::clock::{from_millis, to_millis};
use crate::storage::preferences::{keys, Preferences};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub use streak::{Streak, StreakChange};

/// What an achievement's milestone is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementType {
    /// Total workouts logged
    WorkoutCount,
    /// Total meals logged
    MealCount,
    /// Total goals completed
    GoalCompleted,
    /// Current consecutive-day streak
    StreakDays,
}

impl std::fmt::Display for AchievementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementType::WorkoutCount => write!(f, "Workouts"),
            AchievementType::MealCount => write!(f, "Meals"),
            AchievementType::GoalCompleted => write!(f, "Goals"),
            AchievementType::StreakDays => write!(f, "Streak"),
        }
    }
}

/// Achievement definition plus earned state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    /// Stable identifier (`ach_1`..)
    pub id: String,
    /// Display title
    pub title: String,
    /// Description
    pub description: String,
    /// Counter the milestone is compared with
    pub achievement_type: AchievementType,
    /// Threshold that earns the achievement
    pub milestone: u32,
    /// Icon resource name
    pub icon: String,
    /// Whether earned
    pub earned: bool,
    /// When earned
    pub earned_date: Option<NaiveDateTime>,
}

impl Achievement {
    /// Create an unearned achievement.
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        achievement_type: AchievementType,
        milestone: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            achievement_type,
            milestone,
            icon: definitions::icon_for(id).to_string(),
            earned: false,
            earned_date: None,
        }
    }

    /// Notification text shown when the achievement unlocks.
    pub fn unlock_message(&self) -> String {
        format!(
            "Achievement Unlocked: {}! - {}",
            self.title, self.description
        )
    }

    /// Progress toward the milestone as a percentage (0..=100).
    pub fn percentage(&self, value: u32) -> u8 {
        if self.earned || self.milestone == 0 {
            return 100;
        }
        ((u64::from(value) * 100 / u64::from(self.milestone)).min(100)) as u8
    }
}

/// Snapshot of the tracker counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementProgress {
    pub workout_count: u32,
    pub meal_count: u32,
    pub goals_completed: u32,
    pub current_streak: u32,
}

impl AchievementProgress {
    /// Counter matching an achievement type.
    pub fn value_for(&self, achievement_type: AchievementType) -> u32 {
        match achievement_type {
            AchievementType::WorkoutCount => self.workout_count,
            AchievementType::MealCount => self.meal_count,
            AchievementType::GoalCompleted => self.goals_completed,
            AchievementType::StreakDays => self.current_streak,
        }
    }
}

/// Counters, streak and the achievement catalog.
#[derive(Debug, Clone)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    workout_count: u32,
    meal_count: u32,
    goals_completed: u32,
    streak: Streak,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementTracker {
    /// Fresh tracker with the full catalog, nothing earned.
    pub fn new() -> Self {
        Self {
            achievements: definitions::all_achievements(),
            workout_count: 0,
            meal_count: 0,
            goals_completed: 0,
            streak: Streak::default(),
        }
    }

    /// Count a workout logged at `now`, update the streak and evaluate.
    pub fn record_workout(&mut self, now: NaiveDateTime) -> Option<Achievement> {
        self.workout_count = self.workout_count.saturating_add(1);
        let change = self.streak.record(now.date());
        tracing::debug!(
            "Workout #{} recorded, streak {} ({:?})",
            self.workout_count,
            self.streak.current(),
            change
        );
        self.evaluate(now)
    }

    /// Count a meal logged at `now` and evaluate.
    pub fn record_meal(&mut self, now: NaiveDateTime) -> Option<Achievement> {
        self.meal_count = self.meal_count.saturating_add(1);
        self.evaluate(now)
    }

    /// Count a completed goal and evaluate.
    pub fn record_goal_completed(&mut self, now: NaiveDateTime) -> Option<Achievement> {
        self.goals_completed = self.goals_completed.saturating_add(1);
        self.evaluate(now)
    }

    /// Mark every unearned achievement whose counter reached its milestone.
    ///
    /// Only the last unlock in catalog order is returned; earlier unlocks in
    /// the same call are still marked earned.
    pub fn evaluate(&mut self, now: NaiveDateTime) -> Option<Achievement> {
        let progress = self.progress();
        let mut newest = None;

        for achievement in self.achievements.iter_mut().filter(|a| !a.earned) {
            if progress.value_for(achievement.achievement_type) >= achievement.milestone {
                achievement.earned = true;
                achievement.earned_date = Some(now);
                tracing::info!("Achievement unlocked: {} ({})", achievement.title, achievement.id);
                newest = Some(achievement.clone());
            }
        }

        newest
    }

    /// Current counter values.
    pub fn progress(&self) -> AchievementProgress {
        AchievementProgress {
            workout_count: self.workout_count,
            meal_count: self.meal_count,
            goals_completed: self.goals_completed,
            current_streak: self.streak.current(),
        }
    }

    pub fn streak(&self) -> &Streak {
        &self.streak
    }

    /// The full catalog in order.
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Earned achievements in catalog order.
    pub fn earned(&self) -> Vec<&Achievement> {
        self.achievements.iter().filter(|a| a.earned).collect()
    }

    /// Share of the catalog earned, as a percentage.
    pub fn completion_percentage(&self) -> f32 {
        if self.achievements.is_empty() {
            return 0.0;
        }
        (self.earned().len() as f32 / self.achievements.len() as f32) * 100.0
    }

    /// Zero every counter and un-earn every achievement.
    pub fn reset(&mut self) {
        self.workout_count = 0;
        self.meal_count = 0;
        self.goals_completed = 0;
        self.streak.reset();
        for achievement in &mut self.achievements {
            achievement.earned = false;
            achievement.earned_date = None;
        }
    }

    /// Load counters, streak and earned flags from preferences.
    pub fn restore(&mut self, prefs: &Preferences) {
        let ns = keys::NS_ACHIEVEMENTS;
        self.workout_count = prefs.get_count(ns, keys::WORKOUT_COUNT);
        self.meal_count = prefs.get_count(ns, keys::MEAL_COUNT);
        self.goals_completed = prefs.get_count(ns, keys::GOALS_COMPLETED);

        let last_day = prefs
            .get_string(ns, keys::LAST_WORKOUT_DATE)
            .and_then(|s| Streak::parse_day(&s));
        self.streak = Streak::from_parts(prefs.get_count(ns, keys::CURRENT_STREAK), last_day);

        for achievement in &mut self.achievements {
            if prefs.get_bool(ns, &keys::achievement_earned(&achievement.id), false) {
                achievement.earned = true;
                achievement.earned_date =
                    from_millis(prefs.get_int(ns, &keys::achievement_date(&achievement.id), 0));
            }
        }

        tracing::debug!(
            "Restored achievement progress: {:?}, {} earned",
            self.progress(),
            self.earned().len()
        );
    }

    /// Save counters, streak and earned flags to preferences.
    pub fn persist(&self, prefs: &mut Preferences) {
        let ns = keys::NS_ACHIEVEMENTS;
        prefs.put_int(ns, keys::WORKOUT_COUNT, i64::from(self.workout_count));
        prefs.put_int(ns, keys::MEAL_COUNT, i64::from(self.meal_count));
        prefs.put_int(ns, keys::GOALS_COMPLETED, i64::from(self.goals_completed));
        prefs.put_int(ns, keys::CURRENT_STREAK, i64::from(self.streak.current()));
        prefs.put_string(
            ns,
            keys::LAST_WORKOUT_DATE,
            self.streak.last_day_string().as_deref(),
        );

        for achievement in self.achievements.iter().filter(|a| a.earned) {
            prefs.put_bool(ns, &keys::achievement_earned(&achievement.id), true);
            if let Some(date) = achievement.earned_date {
                prefs.put_int(ns, &keys::achievement_date(&achievement.id), to_millis(date));
            }
        }
    }
}
