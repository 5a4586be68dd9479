//! Goal list management.

use super::types::{FitnessGoal, GoalType};
use crate::metrics::Summary;

/// Result of toggling a goal's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalToggle {
    /// Goal moved from open to completed
    Completed,
    /// Goal moved from completed back to open
    Reopened,
}

/// Ordered list of goals plus the lifetime completed-goal count.
#[derive(Debug, Clone, Default)]
pub struct GoalBoard {
    goals: Vec<FitnessGoal>,
    completed_count: u32,
}

impl GoalBoard {
    /// Empty board carrying a previously persisted completed count.
    pub fn new(completed_count: u32) -> Self {
        Self {
            goals: Vec::new(),
            completed_count,
        }
    }

    /// Replace the list with the three default goals derived from `summary`.
    pub fn seed_defaults(&mut self, summary: &Summary) {
        self.goals = vec![
            FitnessGoal::new(
                "Weight Loss",
                "Lose weight through exercise and diet",
                5.0,
                summary.weight_loss_progress(),
                "kg",
                GoalType::WeightLoss,
            ),
            FitnessGoal::new(
                "Monthly Workouts",
                "Complete workouts this month",
                20.0,
                f64::from(summary.total_workouts),
                "workouts",
                GoalType::Endurance,
            ),
            FitnessGoal::new(
                "Calorie Deficit",
                "Maintain daily calorie deficit",
                500.0,
                summary.calorie_deficit(),
                "calories",
                GoalType::WeightLoss,
            ),
        ];
    }

    pub fn goals(&self) -> &[FitnessGoal] {
        &self.goals
    }

    pub fn get(&self, index: usize) -> Option<&FitnessGoal> {
        self.goals.get(index)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals completed over the lifetime of the data set.
    pub fn completed_count(&self) -> u32 {
        self.completed_count
    }

    /// Insert a goal at the top of the list.
    pub fn add(&mut self, goal: FitnessGoal) {
        self.goals.insert(0, goal);
    }

    /// Replace the editable fields of a goal.
    ///
    /// Identity, category and completion flag are kept from the existing goal.
    pub fn update(&mut self, index: usize, edited: FitnessGoal) -> Result<&FitnessGoal, GoalError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(GoalError::IndexOutOfRange { index, len })?;

        goal.title = edited.title;
        goal.description = edited.description;
        goal.target_value = edited.target_value;
        goal.current_value = edited.current_value;
        goal.unit = edited.unit;
        goal.deadline = edited.deadline.or(goal.deadline);

        Ok(&*goal)
    }

    /// Remove a goal, returning it.
    pub fn remove(&mut self, index: usize) -> Result<FitnessGoal, GoalError> {
        if index >= self.goals.len() {
            return Err(GoalError::IndexOutOfRange {
                index,
                len: self.goals.len(),
            });
        }
        Ok(self.goals.remove(index))
    }

    /// Flip a goal between open and completed.
    ///
    /// Completing bumps the lifetime count; reopening leaves it unchanged.
    pub fn toggle_completion(&mut self, index: usize) -> Result<GoalToggle, GoalError> {
        let len = self.goals.len();
        let goal = self
            .goals
            .get_mut(index)
            .ok_or(GoalError::IndexOutOfRange { index, len })?;

        if goal.is_completed {
            goal.is_completed = false;
            tracing::debug!("Goal '{}' reopened", goal.title);
            Ok(GoalToggle::Reopened)
        } else {
            goal.is_completed = true;
            self.completed_count = self.completed_count.saturating_add(1);
            tracing::info!("Goal '{}' completed ({} total)", goal.title, self.completed_count);
            Ok(GoalToggle::Completed)
        }
    }

    /// Share of listed goals that are completed, 0..=100.
    pub fn overall_progress(&self) -> u8 {
        if self.goals.is_empty() {
            return 0;
        }
        let completed = self.goals.iter().filter(|g| g.is_completed).count();
        ((completed * 100) / self.goals.len()) as u8
    }

    /// Drop every goal and zero the completed count.
    pub fn clear(&mut self) {
        self.goals.clear();
        self.completed_count = 0;
    }
}

/// Goal errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GoalError {
    #[error("No goal at position {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::StatsSettings;
    use crate::workouts::Workout;
    use chrono::{Duration, NaiveDate};

    fn goal(title: &str) -> FitnessGoal {
        FitnessGoal::new(title, "desc", 10.0, 0.0, "units", GoalType::MuscleGain)
    }

    #[test]
    fn test_seed_defaults_from_summary() {
        let now = NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let workouts: Vec<_> = (0..12)
            .map(|i| Workout::new("Run", 30, 250, now - Duration::days(i)))
            .collect();
        let summary = Summary::compute(&workouts, &[], now, &StatsSettings::default());

        let mut board = GoalBoard::default();
        board.seed_defaults(&summary);

        assert_eq!(board.len(), 3);
        assert_eq!(board.goals()[0].title, "Weight Loss");
        assert!((board.goals()[0].current_value - 1.2).abs() < 1e-9);
        assert_eq!(board.goals()[1].current_value, 12.0);
        assert_eq!(board.goals()[1].goal_type, GoalType::Endurance);
        assert_eq!(board.goals()[2].target_value, 500.0);
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut board = GoalBoard::default();
        board.add(goal("First"));
        board.add(goal("Second"));
        assert_eq!(board.goals()[0].title, "Second");
    }

    #[test]
    fn test_update_keeps_identity_and_status() {
        let mut board = GoalBoard::default();
        board.add(goal("Pushups"));
        board.toggle_completion(0).unwrap();
        let id = board.goals()[0].id;

        let mut edited = FitnessGoal::new("Pull-ups", "more", 20.0, 4.0, "reps", GoalType::Flexibility);
        edited.is_completed = false;
        let updated = board.update(0, edited).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "Pull-ups");
        assert_eq!(updated.goal_type, GoalType::MuscleGain);
        assert!(updated.is_completed);
    }

    #[test]
    fn test_toggle_counts_only_completions() {
        let mut board = GoalBoard::new(2);
        board.add(goal("A"));

        assert_eq!(board.toggle_completion(0).unwrap(), GoalToggle::Completed);
        assert_eq!(board.toggle_completion(0).unwrap(), GoalToggle::Reopened);
        assert_eq!(board.toggle_completion(0).unwrap(), GoalToggle::Completed);
        assert_eq!(board.completed_count(), 4);
    }

    #[test]
    fn test_overall_progress() {
        let mut board = GoalBoard::default();
        assert_eq!(board.overall_progress(), 0);

        board.add(goal("A"));
        board.add(goal("B"));
        board.add(goal("C"));
        board.toggle_completion(1).unwrap();
        assert_eq!(board.overall_progress(), 33);
    }

    #[test]
    fn test_out_of_range() {
        let mut board = GoalBoard::default();
        assert_eq!(
            board.remove(0),
            Err(GoalError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(board.toggle_completion(3).is_err());
    }
}
