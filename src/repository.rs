//! In-memory data repository.
//!
//! Owns the logged workouts and meals, favorite templates, goals and the
//! achievement tracker. Lists live only for the lifetime of the repository;
//! counters, streak, earned flags and settings are persisted through
//! [`Preferences`] after every event.

use crate::achievements::{Achievement, AchievementProgress, AchievementTracker};
use crate::clock::Clock;
use crate::goals::{FitnessGoal, GoalBoard, GoalError, GoalToggle};
use crate::metrics::{self, Summary, WeekProgress};
use crate::nutrition::{Meal, MealType};
use crate::storage::config::StatsSettings;
use crate::storage::preferences::{keys, Preferences};
use crate::workouts::{FavoriteTemplates, TemplateKey, Workout};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Central store for one user's data.
pub struct DataRepository {
    prefs: Preferences,
    clock: Box<dyn Clock>,
    settings: StatsSettings,
    workouts: Vec<Workout>,
    meals: Vec<Meal>,
    favorites: FavoriteTemplates,
    goals: GoalBoard,
    tracker: AchievementTracker,
}

impl std::fmt::Debug for DataRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataRepository")
            .field("workouts", &self.workouts.len())
            .field("meals", &self.meals.len())
            .field("favorites", &self.favorites.len())
            .field("goals", &self.goals.len())
            .field("progress", &self.tracker.progress())
            .finish_non_exhaustive()
    }
}

impl DataRepository {
    /// Create a repository and restore persisted achievement progress.
    pub fn new(prefs: Preferences, clock: Box<dyn Clock>, settings: StatsSettings) -> Self {
        let mut tracker = AchievementTracker::new();
        tracker.restore(&prefs);
        let goals = GoalBoard::new(prefs.completed_goals_count());

        tracing::info!(
            "Repository ready ({} achievements earned, {} goals completed)",
            tracker.earned().len(),
            goals.completed_count()
        );

        Self {
            prefs,
            clock,
            settings,
            workouts: Vec::new(),
            meals: Vec::new(),
            favorites: FavoriteTemplates::new(),
            goals,
            tracker,
        }
    }

    /// Current time from the injected clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn settings(&self) -> &StatsSettings {
        &self.settings
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.prefs
    }

    fn persist_progress(&mut self) {
        self.tracker.persist(&mut self.prefs);
    }

    // ========== Workouts ==========

    /// Log a workout. Returns the achievement it unlocked, if any.
    pub fn add_workout(&mut self, workout: Workout) -> Option<Achievement> {
        tracing::debug!("Logging workout {}", workout.summary());
        self.workouts.push(workout);

        let unlocked = self.tracker.record_workout(self.clock.now());
        self.persist_progress();
        unlocked
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Remove a workout record. Counters and streak are left as they are.
    pub fn delete_workout(&mut self, id: Uuid) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.id == id)?;
        let removed = self.workouts.remove(index);
        tracing::debug!("Deleted workout {}", removed.summary());
        Some(removed)
    }

    /// Save a workout as a favorite template. Returns `false` for duplicates.
    pub fn add_favorite_template(&mut self, workout: &Workout) -> bool {
        let added = self.favorites.add(workout);
        if added {
            tracing::debug!("Added favorite template {}", workout.summary());
        }
        added
    }

    pub fn remove_favorite_template(&mut self, workout: &Workout) -> bool {
        self.favorites.remove(&workout.template_key()) > 0
    }

    pub fn is_favorite_template(&self, workout: &Workout) -> bool {
        self.favorites.contains(&workout.template_key())
    }

    pub fn favorite_templates(&self) -> &[Workout] {
        self.favorites.as_slice()
    }

    /// Replace a logged workout with a copy carrying `is_favorite`.
    pub fn update_workout_favorite(&mut self, id: Uuid, is_favorite: bool) -> bool {
        match self.workouts.iter_mut().find(|w| w.id == id) {
            Some(slot) => {
                *slot = slot.with_favorite(is_favorite);
                true
            }
            None => false,
        }
    }

    /// Drop the matching template and clear the flag on every matching workout.
    pub fn remove_workout_from_all_favorites(
        &mut self,
        name: &str,
        duration_minutes: u32,
        calories_burned: u32,
    ) {
        let key = TemplateKey::new(name, duration_minutes, calories_burned);
        self.favorites.remove(&key);

        let mut cleared = 0;
        for slot in self.workouts.iter_mut().filter(|w| w.matches(&key)) {
            *slot = slot.with_favorite(false);
            cleared += 1;
        }
        tracing::debug!("Removed favorite {:?} from {} workouts", key, cleared);
    }

    /// Flip a logged workout's favorite state. Returns the new state.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let workout = self.workout(id)?.clone();

        if workout.is_favorite {
            self.remove_workout_from_all_favorites(
                &workout.name,
                workout.duration_minutes,
                workout.calories_burned,
            );
            Some(false)
        } else {
            self.add_favorite_template(&workout);
            self.update_workout_favorite(id, true);
            Some(true)
        }
    }

    /// Log a fresh copy of a favorite template.
    pub fn log_from_template(&mut self, index: usize) -> Option<(Workout, Option<Achievement>)> {
        let template = self.favorites.get(index)?;
        let workout = Workout::new(
            template.name.clone(),
            template.duration_minutes,
            template.calories_burned,
            self.clock.now(),
        )
        .with_exercises(template.exercises.clone())
        .favorite(true);

        let unlocked = self.add_workout(workout.clone());
        Some((workout, unlocked))
    }

    /// Workouts inside the statistics window.
    pub fn last_30_days_workouts(&self) -> Vec<Workout> {
        metrics::workouts_in_window(&self.workouts, self.clock.now(), self.settings.window_days)
    }

    pub fn total_calories_burned(&self) -> u32 {
        self.last_30_days_workouts()
            .iter()
            .fold(0u32, |acc, w| acc.saturating_add(w.calories_burned))
    }

    pub fn total_workouts(&self) -> u32 {
        u32::try_from(self.last_30_days_workouts().len()).unwrap_or(u32::MAX)
    }

    // ========== Meals ==========

    /// Log a meal. Returns the achievement it unlocked, if any.
    pub fn add_meal(&mut self, meal: Meal) -> Option<Achievement> {
        tracing::debug!("Logging meal {} ({} kcal)", meal.name, meal.calories);
        self.meals.push(meal);

        let unlocked = self.tracker.record_meal(self.clock.now());
        self.persist_progress();
        unlocked
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn delete_meal(&mut self, id: Uuid) -> Option<Meal> {
        let index = self.meals.iter().position(|m| m.id == id)?;
        Some(self.meals.remove(index))
    }

    /// Meals inside the statistics window.
    pub fn last_30_days_meals(&self) -> Vec<Meal> {
        metrics::meals_in_window(&self.meals, self.clock.now(), self.settings.window_days)
    }

    pub fn average_daily_calories(&self) -> u32 {
        self.summary().average_daily_calories
    }

    pub fn total_protein(&self) -> f64 {
        self.last_30_days_meals().iter().map(|m| m.protein).sum()
    }

    pub fn total_carbs(&self) -> f64 {
        self.last_30_days_meals().iter().map(|m| m.carbs).sum()
    }

    pub fn total_fat(&self) -> f64 {
        self.last_30_days_meals().iter().map(|m| m.fat).sum()
    }

    // ========== Goals ==========

    pub fn goals(&self) -> &GoalBoard {
        &self.goals
    }

    /// Replace the goal list with the defaults derived from current stats.
    pub fn seed_default_goals(&mut self) {
        let summary = self.summary();
        self.goals.seed_defaults(&summary);
    }

    pub fn add_goal(&mut self, goal: FitnessGoal) {
        tracing::debug!("Adding goal '{}'", goal.title);
        self.goals.add(goal);
    }

    pub fn update_goal(
        &mut self,
        index: usize,
        edited: FitnessGoal,
    ) -> Result<&FitnessGoal, GoalError> {
        self.goals.update(index, edited)
    }

    pub fn delete_goal(&mut self, index: usize) -> Result<FitnessGoal, GoalError> {
        self.goals.remove(index)
    }

    /// Toggle a goal; completing one counts toward the goal achievements.
    pub fn toggle_goal(
        &mut self,
        index: usize,
    ) -> Result<(GoalToggle, Option<Achievement>), GoalError> {
        let toggle = self.goals.toggle_completion(index)?;
        let unlocked = match toggle {
            GoalToggle::Completed => {
                self.prefs
                    .set_completed_goals_count(self.goals.completed_count());
                self.complete_goal()
            }
            GoalToggle::Reopened => None,
        };
        Ok((toggle, unlocked))
    }

    /// Count a completed goal. Returns the achievement it unlocked, if any.
    pub fn complete_goal(&mut self) -> Option<Achievement> {
        let unlocked = self.tracker.record_goal_completed(self.clock.now());
        self.persist_progress();
        unlocked
    }

    // ========== Achievements and statistics ==========

    pub fn achievements(&self) -> &[Achievement] {
        self.tracker.achievements()
    }

    pub fn earned_achievements(&self) -> Vec<&Achievement> {
        self.tracker.earned()
    }

    pub fn achievement_progress(&self) -> AchievementProgress {
        self.tracker.progress()
    }

    pub fn tracker(&self) -> &AchievementTracker {
        &self.tracker
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.workouts, &self.meals, self.clock.now(), &self.settings)
    }

    pub fn weekly_progress(&self) -> Vec<WeekProgress> {
        metrics::weekly_progress(
            &self.workouts,
            self.clock.now(),
            self.settings.weekly_workout_target,
        )
    }

    // ========== Bulk operations ==========

    /// Log the sample workouts and meals into empty lists.
    ///
    /// Samples go through the normal logging path, so they count toward
    /// achievements. Returns the unlocks in the order they happened.
    pub fn seed_sample_data(&mut self) -> Vec<Achievement> {
        let now = self.clock.now();
        let mut unlocked = Vec::new();

        if self.workouts.is_empty() {
            for (name, duration, calories) in [
                ("Morning Cardio", 45, 350),
                ("Strength Training", 60, 450),
                ("Full Body Workout", 50, 400),
            ] {
                unlocked.extend(self.add_workout(Workout::new(name, duration, calories, now)));
            }
        }

        if self.meals.is_empty() {
            let samples = [
                Meal::new("Chicken Salad", 350, MealType::Lunch, now).with_macros(30.0, 20.0, 12.0),
                Meal::new("Protein Shake", 200, MealType::Snack, now).with_macros(25.0, 15.0, 5.0),
            ];
            for meal in samples {
                unlocked.extend(self.add_meal(meal));
            }
        }

        tracing::info!(
            "Seeded sample data ({} workouts, {} meals)",
            self.workouts.len(),
            self.meals.len()
        );
        unlocked
    }

    /// Forget every workout, meal, template and goal and zero all progress.
    pub fn clear_all_data(&mut self) {
        self.workouts.clear();
        self.meals.clear();
        self.favorites.clear();
        self.goals.clear();
        self.tracker.reset();

        self.prefs.clear(keys::NS_ACHIEVEMENTS);
        self.prefs.set_completed_goals_count(0);
        self.persist_progress();

        tracing::info!("All fitness data cleared");
    }
}
