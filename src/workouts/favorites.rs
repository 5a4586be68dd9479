//! Favorite workout templates.
//!
//! Templates are deduplicated by `(name, duration, calories)`, not by id, so
//! starring two separately logged "Morning Cardio 45/350" workouts keeps a
//! single template.

use super::types::{TemplateKey, Workout};

/// Ordered set of favorite workout templates.
#[derive(Debug, Clone, Default)]
pub struct FavoriteTemplates {
    templates: Vec<Workout>,
}

impl FavoriteTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template unless one with the same key exists.
    ///
    /// Returns `true` if the template was added.
    pub fn add(&mut self, workout: &Workout) -> bool {
        if self.contains(&workout.template_key()) {
            return false;
        }
        self.templates.push(workout.with_favorite(true));
        true
    }

    /// Remove every template matching the key. Returns how many were removed.
    pub fn remove(&mut self, key: &TemplateKey) -> usize {
        let before = self.templates.len();
        self.templates.retain(|t| !t.matches(key));
        before - self.templates.len()
    }

    pub fn contains(&self, key: &TemplateKey) -> bool {
        self.templates.iter().any(|t| t.matches(key))
    }

    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.templates.get(index)
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) {
        self.templates.clear();
    }
}
