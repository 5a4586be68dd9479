//! Scalar key-value preferences.
//!
//! Preferences are grouped into namespaces, one per logical settings file
//! (`achievements`, `app_settings`, ...). Reads default when a value is absent
//! or unreadable and writes are best-effort: store failures are logged and
//! swallowed so that no user action fails because a flag could not be saved.

use crate::clock::{from_millis, to_millis};
use crate::storage::config::ThemeMode;
use crate::storage::database::DatabaseError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Namespace and key names.
pub mod keys {
    pub const NS_ACHIEVEMENTS: &str = "achievements";
    pub const NS_APP_SETTINGS: &str = "app_settings";
    pub const NS_APP_PREFS: &str = "fitness_daily_prefs";
    pub const NS_GOALS: &str = "goals_data";

    /// Namespaces wiped by "delete all data". `fitness_daily_prefs` is kept
    /// so the tutorial is not shown again.
    pub const CLEARABLE_NAMESPACES: &[&str] = &[
        NS_APP_SETTINGS,
        "fitness_data",
        NS_GOALS,
        "nutrition_data",
        "workout_data",
        "user_preferences",
    ];

    pub const WORKOUT_COUNT: &str = "workout_count";
    pub const MEAL_COUNT: &str = "meal_count";
    pub const GOALS_COMPLETED: &str = "goals_completed";
    pub const CURRENT_STREAK: &str = "current_streak";
    pub const LAST_WORKOUT_DATE: &str = "last_workout_date";

    pub const THEME_MODE: &str = "theme_mode";
    pub const LAST_STARTUP_QUOTE: &str = "last_startup_quote";

    pub const FIRST_LAUNCH: &str = "first_launch";
    pub const TUTORIAL_COMPLETED: &str = "tutorial_completed";

    pub const COMPLETED_GOALS_COUNT: &str = "completed_goals_count";

    /// Key of an achievement's earned flag.
    pub fn achievement_earned(id: &str) -> String {
        format!("achievement_{}_earned", id)
    }

    /// Key of an achievement's earned date (epoch millis).
    pub fn achievement_date(id: &str) -> String {
        format!("achievement_{}_date", id)
    }
}

/// A stored scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Backend for scalar preferences.
pub trait PreferenceStore {
    /// Read a value, `None` if the key is absent.
    fn get(&self, namespace: &str, key: &str) -> Result<Option<PrefValue>, DatabaseError>;

    /// Insert or overwrite a value.
    fn put(&mut self, namespace: &str, key: &str, value: PrefValue) -> Result<(), DatabaseError>;

    /// Remove a single key. Removing an absent key is not an error.
    fn remove(&mut self, namespace: &str, key: &str) -> Result<(), DatabaseError>;

    /// Remove every key in a namespace, returning how many were removed.
    fn clear_namespace(&mut self, namespace: &str) -> Result<usize, DatabaseError>;
}

/// Process-local store, used for tests and `--in-memory` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<(String, String), PrefValue>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys across all namespaces.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, namespace: &str, key: &str) -> Result<Option<PrefValue>, DatabaseError> {
        Ok(self
            .values
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    fn put(&mut self, namespace: &str, key: &str, value: PrefValue) -> Result<(), DatabaseError> {
        self.values
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }

    fn remove(&mut self, namespace: &str, key: &str) -> Result<(), DatabaseError> {
        self.values.remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }

    fn clear_namespace(&mut self, namespace: &str) -> Result<usize, DatabaseError> {
        let before = self.values.len();
        self.values.retain(|(ns, _), _| ns != namespace);
        Ok(before - self.values.len())
    }
}

/// Typed, defaulting front for a [`PreferenceStore`].
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for Preferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}

impl Preferences {
    /// Wrap a store.
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Preferences that live only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryPreferenceStore::new())
    }

    fn read(&self, namespace: &str, key: &str) -> Option<PrefValue> {
        match self.store.get(namespace, key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read preference {}/{}: {}", namespace, key, e);
                None
            }
        }
    }

    fn write(&mut self, namespace: &str, key: &str, value: PrefValue) {
        if let Err(e) = self.store.put(namespace, key, value) {
            tracing::warn!("Failed to write preference {}/{}: {}", namespace, key, e);
        }
    }

    /// Read a boolean, falling back to `default`.
    pub fn get_bool(&self, namespace: &str, key: &str, default: bool) -> bool {
        match self.read(namespace, key) {
            Some(PrefValue::Bool(v)) => v,
            Some(other) => {
                tracing::debug!("Preference {}/{} is not a bool: {:?}", namespace, key, other);
                default
            }
            None => default,
        }
    }

    /// Read an integer, falling back to `default`.
    pub fn get_int(&self, namespace: &str, key: &str, default: i64) -> i64 {
        match self.read(namespace, key) {
            Some(PrefValue::Int(v)) => v,
            Some(other) => {
                tracing::debug!("Preference {}/{} is not an int: {:?}", namespace, key, other);
                default
            }
            None => default,
        }
    }

    /// Read a string, `None` when absent.
    pub fn get_string(&self, namespace: &str, key: &str) -> Option<String> {
        match self.read(namespace, key) {
            Some(PrefValue::Text(v)) => Some(v),
            Some(other) => {
                tracing::debug!("Preference {}/{} is not text: {:?}", namespace, key, other);
                None
            }
            None => None,
        }
    }

    /// Read a non-negative counter.
    pub fn get_count(&self, namespace: &str, key: &str) -> u32 {
        u32::try_from(self.get_int(namespace, key, 0)).unwrap_or(0)
    }

    pub fn put_bool(&mut self, namespace: &str, key: &str, value: bool) {
        self.write(namespace, key, PrefValue::Bool(value));
    }

    pub fn put_int(&mut self, namespace: &str, key: &str, value: i64) {
        self.write(namespace, key, PrefValue::Int(value));
    }

    /// Write a string, or remove the key when `value` is `None`.
    pub fn put_string(&mut self, namespace: &str, key: &str, value: Option<&str>) {
        match value {
            Some(v) => self.write(namespace, key, PrefValue::Text(v.to_string())),
            None => self.remove(namespace, key),
        }
    }

    pub fn remove(&mut self, namespace: &str, key: &str) {
        if let Err(e) = self.store.remove(namespace, key) {
            tracing::warn!("Failed to remove preference {}/{}: {}", namespace, key, e);
        }
    }

    /// Wipe a namespace.
    pub fn clear(&mut self, namespace: &str) {
        match self.store.clear_namespace(namespace) {
            Ok(removed) => tracing::debug!("Cleared {} preferences from {}", removed, namespace),
            Err(e) => tracing::warn!("Failed to clear preferences {}: {}", namespace, e),
        }
    }

    // ========== Application settings ==========

    /// Saved theme, following the system theme by default.
    pub fn theme_mode(&self) -> ThemeMode {
        let code = self.get_int(
            keys::NS_APP_SETTINGS,
            keys::THEME_MODE,
            ThemeMode::System.code(),
        );
        ThemeMode::from_code(code)
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.put_int(keys::NS_APP_SETTINGS, keys::THEME_MODE, mode.code());
    }

    pub fn is_first_launch(&self) -> bool {
        self.get_bool(keys::NS_APP_PREFS, keys::FIRST_LAUNCH, true)
    }

    pub fn set_first_launch_completed(&mut self) {
        self.put_bool(keys::NS_APP_PREFS, keys::FIRST_LAUNCH, false);
    }

    pub fn is_tutorial_completed(&self) -> bool {
        self.get_bool(keys::NS_APP_PREFS, keys::TUTORIAL_COMPLETED, false)
    }

    pub fn set_tutorial_completed(&mut self) {
        self.put_bool(keys::NS_APP_PREFS, keys::TUTORIAL_COMPLETED, true);
    }

    /// When the startup quote was last shown.
    pub fn last_startup_quote(&self) -> Option<NaiveDateTime> {
        from_millis(self.get_int(keys::NS_APP_SETTINGS, keys::LAST_STARTUP_QUOTE, 0))
    }

    pub fn set_last_startup_quote(&mut self, at: NaiveDateTime) {
        self.put_int(keys::NS_APP_SETTINGS, keys::LAST_STARTUP_QUOTE, to_millis(at));
    }

    pub fn completed_goals_count(&self) -> u32 {
        self.get_count(keys::NS_GOALS, keys::COMPLETED_GOALS_COUNT)
    }

    pub fn set_completed_goals_count(&mut self, count: u32) {
        self.put_int(keys::NS_GOALS, keys::COMPLETED_GOALS_COUNT, i64::from(count));
    }

    /// Wipe every user-facing settings namespace.
    pub fn clear_app_data(&mut self) {
        for namespace in keys::CLEARABLE_NAMESPACES {
            self.clear(namespace);
        }
    }
}
