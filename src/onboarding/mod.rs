//! First-launch tutorial.
//!
//! Walks a new user through the five tutorial pages. Finishing or skipping
//! the tutorial clears the first-launch flag so it is not shown again.

pub mod steps;

use crate::storage::preferences::Preferences;
use serde::{Deserialize, Serialize};

pub use steps::OnboardingStep;

/// State of the tutorial.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnboardingState {
    /// Whether the tutorial has been finished
    pub completed: bool,
    /// Page currently shown
    pub current_step: OnboardingStep,
    /// Whether the user skipped ahead
    pub skipped: bool,
    /// Pages already seen
    pub completed_steps: Vec<OnboardingStep>,
}

impl OnboardingState {
    /// Check if a specific step is complete.
    pub fn is_step_complete(&self, step: OnboardingStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Mark the current page as seen and advance; the last page finishes.
    pub fn complete_current_step(&mut self) {
        if !self.completed_steps.contains(&self.current_step) {
            self.completed_steps.push(self.current_step);
        }

        match self.current_step.next() {
            Some(next) => self.current_step = next,
            None => self.completed = true,
        }
    }

    /// Go back to the previous page.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Skip the rest of the tutorial.
    pub fn skip(&mut self) {
        self.skipped = true;
        self.completed = true;
    }

    /// Get progress as a percentage (0-100).
    pub fn progress_percent(&self) -> u8 {
        let total = OnboardingStep::all().len();
        ((self.completed_steps.len() * 100) / total) as u8
    }
}

/// Tutorial controller bound to the first-launch preferences.
#[derive(Debug, Default)]
pub struct Tutorial {
    state: OnboardingState,
}

impl Tutorial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tutorial should be shown at startup.
    pub fn should_show(prefs: &Preferences) -> bool {
        prefs.is_first_launch()
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub fn current_step(&self) -> OnboardingStep {
        self.state.current_step
    }

    /// Advance to the next page, finishing after the last one.
    ///
    /// Returns `true` once the tutorial is complete; preferences are updated
    /// at that point.
    pub fn advance(&mut self, prefs: &mut Preferences) -> bool {
        self.state.complete_current_step();
        if self.state.completed {
            Self::finish(prefs);
        }
        self.state.completed
    }

    pub fn back(&mut self) {
        self.state.go_back();
    }

    /// Skip straight to the end.
    pub fn skip(&mut self, prefs: &mut Preferences) {
        self.state.skip();
        Self::finish(prefs);
    }

    fn finish(prefs: &mut Preferences) {
        prefs.set_first_launch_completed();
        prefs.set_tutorial_completed();
        tracing::info!("Tutorial completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_through_all_pages() {
        let mut prefs = Preferences::in_memory();
        let mut tutorial = Tutorial::new();
        assert!(Tutorial::should_show(&prefs));

        let pages = OnboardingStep::all().len();
        for _ in 0..pages - 1 {
            assert!(!tutorial.advance(&mut prefs));
        }
        assert_eq!(tutorial.current_step(), OnboardingStep::ShareJourney);
        assert!(tutorial.advance(&mut prefs));

        assert_eq!(tutorial.state().progress_percent(), 100);
        assert!(!Tutorial::should_show(&prefs));
        assert!(prefs.is_tutorial_completed());
    }

    #[test]
    fn test_skip_marks_complete() {
        let mut prefs = Preferences::in_memory();
        let mut tutorial = Tutorial::new();
        tutorial.skip(&mut prefs);

        assert!(tutorial.state().skipped);
        assert!(!prefs.is_first_launch());
        assert!(prefs.is_tutorial_completed());
    }

    #[test]
    fn test_previous_stops_at_first_page() {
        let mut prefs = Preferences::in_memory();
        let mut tutorial = Tutorial::new();
        tutorial.back();
        assert_eq!(tutorial.current_step(), OnboardingStep::Welcome);

        tutorial.advance(&mut prefs);
        tutorial.back();
        assert_eq!(tutorial.current_step(), OnboardingStep::Welcome);
        assert!(tutorial.state().is_step_complete(OnboardingStep::Welcome));
    }

    #[test]
    fn test_step_navigation() {
        assert!(OnboardingStep::Welcome.is_first());
        assert_eq!(OnboardingStep::Welcome.previous(), None);
        assert_eq!(OnboardingStep::ShareJourney.next(), None);
        assert!(OnboardingStep::ShareJourney.is_last());
        assert_eq!(
            OnboardingStep::TrackWorkouts.next(),
            Some(OnboardingStep::MonitorNutrition)
        );
    }
}
